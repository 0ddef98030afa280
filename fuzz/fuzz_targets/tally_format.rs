// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tally formatter.
//!
//! Tallies arrive as free-form strings from the vote store. Whatever they
//! hold, the formatter must hand back four single-digit slots.

#![no_main]

use libfuzzer_sys::fuzz_target;
use votebin::format_tally;

fuzz_target!(|digits: &str| {
    let slots = format_tally(digits);
    assert!(slots.iter().all(|&s| s <= 9), "slot out of range for {:?}", digits);

    // only the last four characters matter
    let tail: String = {
        let chars: Vec<char> = digits.chars().collect();
        chars[chars.len().saturating_sub(4)..].iter().collect()
    };
    assert_eq!(format_tally(&tail), slots);
});
