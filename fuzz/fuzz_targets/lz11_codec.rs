// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the LZ11 codec.
//!
//! Compression must round-trip every input, and the decoder must reject a
//! corrupt stream with an error rather than a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use votebin::lz11::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    let _ = decompress(data);

    let packed = compress(data).expect("compression never fails on in-memory input");
    let restored = decompress(&packed).expect("our own stream must decode");
    assert_eq!(restored, data);
});
