// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width table records.
//!
//! Each record knows its exact serialized width (`SIZE`) so the assembler can
//! measure the container without writing it. `write` must emit exactly
//! `SIZE` bytes; the unit tests below pin every width.
//!
//! ```text
//! QuestionInfo (19)            poll_id u32 │ cat1 u8 │ cat2 u8 │ start u32 │ end u32
//!                              │ languages u8 │ text_entry u32
//! QuestionTextInfo (13)        language u8 │ question u32 │ response1 u32 │ response2 u32
//! NationalResult (35)          poll_id u32 │ 6 × u32 tallies │ show_voters u8
//!                              │ show_detailed u8 │ detailed_count u8 │ detailed_start u32
//! DetailedNationalResult (13)  response1 u32 │ response2 u32 │ position_count u8
//!                              │ position_entry u32
//! WorldWideResult (33)         poll_id u32 │ 6 × u32 tallies │ detailed_count u8
//!                              │ detailed_start u32
//! DetailedWorldwideResult (26) reserved u32 │ 4 × u32 tallies │ country_count u16
//!                              │ country_entry u32
//! CountryInfo (5)              language u8 │ text u32
//! ```

use std::io::{self, Write};

/// A record with a fixed big-endian wire width.
pub trait WireRecord {
    const SIZE: usize;

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()>;
}

/// Per-gender response tallies plus predictor tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultTallies {
    pub male_response1: u32,
    pub male_response2: u32,
    pub female_response1: u32,
    pub female_response2: u32,
    pub predictors_response1: u32,
    pub predictors_response2: u32,
}

impl ResultTallies {
    /// Add one vote tally (slots: male r1, female r1, male r2, female r2).
    pub fn add_vote(&mut self, slots: [u32; 4]) {
        self.male_response1 += slots[0];
        self.female_response1 += slots[1];
        self.male_response2 += slots[2];
        self.female_response2 += slots[3];
    }

    /// Add one prediction tally; gender splits collapse into responses.
    pub fn add_prediction(&mut self, slots: [u32; 4]) {
        self.predictors_response1 += slots[0] + slots[1];
        self.predictors_response2 += slots[2] + slots[3];
    }

    pub fn voters(&self) -> u32 {
        self.male_response1 + self.male_response2 + self.female_response1 + self.female_response2
    }

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for v in [
            self.male_response1,
            self.male_response2,
            self.female_response1,
            self.female_response2,
            self.predictors_response1,
            self.predictors_response2,
        ] {
            w.write_all(&v.to_be_bytes())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionInfo {
    pub poll_id: u32,
    pub category1: u8,
    pub category2: u8,
    pub start: u32,
    pub end: u32,
    pub language_count: u8,
    /// Index of this question's first entry in the question text info table.
    pub text_entry: u32,
}

impl WireRecord for QuestionInfo {
    const SIZE: usize = 19;

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.poll_id.to_be_bytes())?;
        w.write_all(&[self.category1, self.category2])?;
        w.write_all(&self.start.to_be_bytes())?;
        w.write_all(&self.end.to_be_bytes())?;
        w.write_all(&[self.language_count])?;
        w.write_all(&self.text_entry.to_be_bytes())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionTextInfo {
    pub language: u8,
    pub question_offset: u32,
    pub response1_offset: u32,
    pub response2_offset: u32,
}

impl WireRecord for QuestionTextInfo {
    const SIZE: usize = 13;

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&[self.language])?;
        w.write_all(&self.question_offset.to_be_bytes())?;
        w.write_all(&self.response1_offset.to_be_bytes())?;
        w.write_all(&self.response2_offset.to_be_bytes())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NationalResult {
    pub poll_id: u32,
    pub tallies: ResultTallies,
    pub show_voter_number: u8,
    pub show_detailed_results: u8,
    pub detailed_count: u8,
    pub detailed_start: u32,
}

impl WireRecord for NationalResult {
    const SIZE: usize = 35;

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.poll_id.to_be_bytes())?;
        self.tallies.write(w)?;
        w.write_all(&[
            self.show_voter_number,
            self.show_detailed_results,
            self.detailed_count,
        ])?;
        w.write_all(&self.detailed_start.to_be_bytes())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailedNationalResult {
    pub response1: u32,
    pub response2: u32,
    pub position_count: u8,
    /// Prefix sum of position counts of every earlier region.
    pub position_entry: u32,
}

impl WireRecord for DetailedNationalResult {
    const SIZE: usize = 13;

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.response1.to_be_bytes())?;
        w.write_all(&self.response2.to_be_bytes())?;
        w.write_all(&[self.position_count])?;
        w.write_all(&self.position_entry.to_be_bytes())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldWideResult {
    pub poll_id: u32,
    pub tallies: ResultTallies,
    pub detailed_count: u8,
    pub detailed_start: u32,
}

impl WireRecord for WorldWideResult {
    const SIZE: usize = 33;

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.poll_id.to_be_bytes())?;
        self.tallies.write(w)?;
        w.write_all(&[self.detailed_count])?;
        w.write_all(&self.detailed_start.to_be_bytes())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailedWorldwideResult {
    pub reserved: u32,
    pub male_response1: u32,
    pub male_response2: u32,
    pub female_response1: u32,
    pub female_response2: u32,
    /// Country-name entries for this country (the UI language count), or 0.
    pub country_table_count: u16,
    pub country_table_entry: u32,
}

impl DetailedWorldwideResult {
    pub fn add_vote(&mut self, slots: [u32; 4]) {
        self.male_response1 += slots[0];
        self.female_response1 += slots[1];
        self.male_response2 += slots[2];
        self.female_response2 += slots[3];
    }

    /// True once at least one vote row was recorded for the country.
    pub fn has_votes(&self) -> bool {
        self.country_table_count != 0
    }
}

impl WireRecord for DetailedWorldwideResult {
    const SIZE: usize = 26;

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.reserved.to_be_bytes())?;
        w.write_all(&self.male_response1.to_be_bytes())?;
        w.write_all(&self.male_response2.to_be_bytes())?;
        w.write_all(&self.female_response1.to_be_bytes())?;
        w.write_all(&self.female_response2.to_be_bytes())?;
        w.write_all(&self.country_table_count.to_be_bytes())?;
        w.write_all(&self.country_table_entry.to_be_bytes())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryInfoEntry {
    pub language: u8,
    pub text_offset: u32,
}

impl WireRecord for CountryInfoEntry {
    const SIZE: usize = 5;

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&[self.language])?;
        w.write_all(&self.text_offset.to_be_bytes())
    }
}
