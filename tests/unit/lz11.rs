//! LZ11 over real containers.

use votebin::config::GeneratorConfig;
use votebin::lz11::{compress, decompress, Compressor, Lz11};
use votebin::tables::{generate, TargetContext};

use crate::common::{sample_dataset, sample_now};

#[test]
fn test_container_compresses_and_restores() {
    let config = GeneratorConfig::default();
    let ctx = TargetContext::new(49, sample_now(), &config).unwrap();
    let container = generate(&sample_dataset(), &ctx).unwrap().bytes;

    let packed = Lz11.compress(&container).unwrap();
    assert_eq!(packed[0], 0x11);
    // the country name tables repeat heavily
    assert!(packed.len() < container.len());
    assert_eq!(decompress(&packed).unwrap(), container);
}

#[test]
fn test_compression_is_deterministic() {
    let input: Vec<u8> = (0..5000u32).map(|i| (i * 7 % 251) as u8).collect();
    assert_eq!(compress(&input).unwrap(), compress(&input).unwrap());
}

#[test]
fn test_incompressible_input_still_decodes() {
    // xorshift noise, no repeats worth encoding
    let mut state = 0x2545_F491u32;
    let input: Vec<u8> = (0..4096)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect();
    let packed = compress(&input).unwrap();
    assert_eq!(decompress(&packed).unwrap(), input);
}
