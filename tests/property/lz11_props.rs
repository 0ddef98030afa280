//! LZ11 properties.

use proptest::prelude::*;
use votebin::lz11::{compress, decompress};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Decompression restores arbitrary input.
    #[test]
    fn prop_decompress_restores_input(input in prop::collection::vec(any::<u8>(), 0..3000)) {
        prop_assert_eq!(decompress(&compress(&input).unwrap()).unwrap(), input);
    }

    /// Long runs exercise every back-reference width.
    #[test]
    fn prop_runs_restore(byte: u8, len in 0usize..70_000) {
        let input = vec![byte; len];
        let packed = compress(&input).unwrap();
        prop_assert_eq!(decompress(&packed).unwrap(), input);
    }

    /// Garbage never panics the decoder.
    #[test]
    fn prop_decoder_rejects_garbage_cleanly(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decompress(&data);
    }
}
