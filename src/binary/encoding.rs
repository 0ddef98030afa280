// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Leaf encoders: wire text, packed tallies and epoch-minute timestamps.
//!
//! These are pure functions with no failure modes. The text encoder doesn't
//! wrap, truncate or escape anything; callers hand it text that was already
//! wrapped when it entered the pipeline (see [`crate::util::wrap`]).
//!
//! # Wire Text
//!
//! ```text
//! units: [u16 BE; n]   UTF-16 code units, surrogate pairs as-is
//! terminator: u16 = 0  always present, even for ""
//! ```
//!
//! No alignment padding follows the terminator. The next string (or table)
//! starts on the very next byte.
//!
//! # Packed Tallies
//!
//! The source stores four single-digit counters in one decimal number:
//! `"1203"` is slots `[1, 2, 0, 3]`. Short inputs are right-aligned (`"7"` is
//! `[0, 0, 0, 7]`) and long inputs keep their four least-significant digits.

use chrono::{DateTime, TimeZone, Utc};

/// Fixed reference epoch for every timestamp field: 2000-01-01T00:00:00Z.
pub const EPOCH_SECONDS: i64 = 946_684_800;

/// Number of slots in a packed tally.
pub const TALLY_SLOTS: usize = 4;

/// Encode text as null-terminated UTF-16 code units.
pub fn encode_text(text: &str) -> Vec<u16> {
    let mut units: Vec<u16> = text.encode_utf16().collect();
    units.push(0);
    units
}

/// Byte length of `text` once encoded, terminator included.
pub fn encoded_text_len(text: &str) -> usize {
    (text.encode_utf16().count() + 1) * 2
}

/// Append code units to `buf` as big-endian bytes.
pub fn write_units(units: &[u16], buf: &mut Vec<u8>) {
    buf.reserve(units.len() * 2);
    for unit in units {
        buf.extend_from_slice(&unit.to_be_bytes());
    }
}

/// Split a packed decimal tally into its four slots.
///
/// Non-digit characters count as zero; they still occupy a slot.
pub fn format_tally(digits: &str) -> [u32; TALLY_SLOTS] {
    let chars: Vec<char> = digits.chars().collect();
    let tail = &chars[chars.len().saturating_sub(TALLY_SLOTS)..];

    let mut slots = [0u32; TALLY_SLOTS];
    let start = TALLY_SLOTS - tail.len();
    for (slot, c) in slots[start..].iter_mut().zip(tail) {
        *slot = c.to_digit(10).unwrap_or(0);
    }
    slots
}

/// Minutes elapsed since [`EPOCH_SECONDS`], clamped to the u32 range.
pub fn epoch_minutes(unix_seconds: i64) -> u32 {
    let minutes = (unix_seconds - EPOCH_SECONDS) / 60;
    minutes.clamp(0, i64::from(u32::MAX)) as u32
}

pub fn timestamp(at: DateTime<Utc>) -> u32 {
    epoch_minutes(at.timestamp())
}

/// Inverse of [`timestamp`], for display and tests.
pub fn from_timestamp(minutes: u32) -> DateTime<Utc> {
    Utc.timestamp_opt(EPOCH_SECONDS + i64::from(minutes) * 60, 0)
        .single()
        .unwrap_or_default()
}
