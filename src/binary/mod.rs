// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary container format.
//!
//! The reader on the other end is a fixed-format parser on constrained
//! hardware. It reads the header, seeks straight to the table it wants via
//! the absolute offsets, and follows text offsets into UTF-16 blobs. So the
//! format has no varints, no alignment and no self-description: packed
//! big-endian fields, fixed record widths, and null-terminated strings.
//!
//! The one ordering rule that matters: an offset may only point at bytes
//! that are appended before it is finalized, and appending never moves
//! anything already measured. Sections go out in this fixed order:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER (69 bytes)                                          │
//! │   version u32 │ filesize u32 │ crc32 u32 │ timestamp u32   │
//! │   country u8 │ publicity u8 │ question_ver u8 │ result_ver │
//! │   9 × (count u8/u16, offset u32)                           │
//! ├────────────────────────────────────────────────────────────┤
//! │ 1. NATIONAL QUESTIONS (19 bytes each)                      │
//! │ 2. WORLDWIDE QUESTIONS (19 bytes each)                     │
//! │ 3. QUESTION TEXT INFO (13 bytes, question × language)      │
//! │ 4. QUESTION TEXT (UTF-16: question, response1, response2)  │
//! ├────────────────────────────────────────────────────────────┤
//! │ 5. NATIONAL RESULTS (35 bytes each)                        │
//! │ 6. DETAILED NATIONAL RESULTS (13 bytes, result × region)   │
//! │ 7. POSITION TABLE (raw map bytes)                          │
//! ├────────────────────────────────────────────────────────────┤
//! │ 8. WORLDWIDE RESULTS (33 bytes, at most one)               │
//! │ 9. DETAILED WORLDWIDE RESULTS (26 bytes per country)       │
//! ├────────────────────────────────────────────────────────────┤
//! │ 10. COUNTRY INFO (5 bytes, country × UI language)          │
//! │ 11. COUNTRY TEXT (UTF-16 names)                            │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! CRC32 (IEEE) covers `bytes[12..]`. The sealed container is then
//! compressed and signed by [`crate::signing`].

mod container;
mod encoding;
mod header;
mod records;

pub use container::{Container, Finalized, Section};
pub use encoding::{
    encode_text, encoded_text_len, epoch_minutes, format_tally, from_timestamp, timestamp,
    write_units, EPOCH_SECONDS, TALLY_SLOTS,
};
pub use header::{
    body_crc32, read_u32_be, seal, TableRef, VoteHeader, CRC32_OFFSET, CRC_START,
    FILESIZE_OFFSET, VERSION,
};
pub use records::{
    CountryInfoEntry, DetailedNationalResult, DetailedWorldwideResult, NationalResult,
    QuestionInfo, QuestionTextInfo, ResultTallies, WireRecord, WorldWideResult,
};
