// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Container assembler: section cursor, running size, finalize.
//!
//! Builders append records in the fixed section order. Each append bumps a
//! running byte count by the record's wire width, so [`Container::current_size`]
//! is exactly the absolute offset the next byte will land at. That is all the
//! offset bookkeeping there is: a builder that needs to point at something it
//! is about to append reads `current_size()` first.
//!
//! Finalizing is measure-then-write. Nothing is serialized until
//! [`Container::finalize`], which writes every section once into a buffer
//! sized up front, checks the written length against the measured size, and
//! patches filesize and CRC32 into the header bytes in place. The header
//! width never changes, so patching can't move any offset.
//!
//! The cursor only moves forward. Appending to a section that precedes the
//! current one is a layout defect (it would shift bytes that earlier offsets
//! already point past) and fails with [`Error::Invariant`].

use std::io::Write;

use tracing::debug;

use super::encoding::{encode_text, write_units};
use super::header::{seal, TableRef, VoteHeader};
use super::records::{
    CountryInfoEntry, DetailedNationalResult, DetailedWorldwideResult, NationalResult,
    QuestionInfo, QuestionTextInfo, WireRecord, WorldWideResult,
};
use crate::error::{Error, Result};

/// Container sections, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Header,
    NationalQuestions,
    WorldwideQuestions,
    QuestionTextInfo,
    QuestionText,
    NationalResults,
    DetailedNationalResults,
    PositionTable,
    WorldwideResults,
    DetailedWorldwideResults,
    CountryInfo,
    CountryText,
}

impl Section {
    pub const ALL: [Section; 12] = [
        Section::Header,
        Section::NationalQuestions,
        Section::WorldwideQuestions,
        Section::QuestionTextInfo,
        Section::QuestionText,
        Section::NationalResults,
        Section::DetailedNationalResults,
        Section::PositionTable,
        Section::WorldwideResults,
        Section::DetailedWorldwideResults,
        Section::CountryInfo,
        Section::CountryText,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// A container being assembled for one target.
#[derive(Debug)]
pub struct Container {
    pub header: VoteHeader,
    pub(crate) national_questions: Vec<QuestionInfo>,
    pub(crate) worldwide_questions: Vec<QuestionInfo>,
    pub(crate) question_text_info: Vec<QuestionTextInfo>,
    pub(crate) question_text: Vec<u16>,
    pub(crate) national_results: Vec<NationalResult>,
    pub(crate) detailed_national_results: Vec<DetailedNationalResult>,
    pub(crate) position_table: Vec<u8>,
    pub(crate) worldwide_results: Vec<WorldWideResult>,
    pub(crate) detailed_worldwide_results: Vec<DetailedWorldwideResult>,
    pub(crate) country_info: Vec<CountryInfoEntry>,
    pub(crate) country_text: Vec<u16>,
    size: usize,
    cursor: Section,
    starts: [usize; 12],
}

/// A finalized, checksummed container.
#[derive(Debug, Clone)]
pub struct Finalized {
    pub header: VoteHeader,
    pub bytes: Vec<u8>,
}

fn append<R: WireRecord>(
    size: &mut usize,
    cursor: Section,
    section: Section,
    table: &mut Vec<R>,
    record: R,
) -> Result<usize> {
    expect_cursor(cursor, section)?;
    *size += R::SIZE;
    table.push(record);
    Ok(table.len() - 1)
}

fn expect_cursor(cursor: Section, section: Section) -> Result<()> {
    if cursor == section {
        Ok(())
    } else {
        Err(Error::invariant(format!(
            "append to {:?} while positioned at {:?}",
            section, cursor
        )))
    }
}

fn narrow<T: TryFrom<usize>>(len: usize, what: &str) -> Result<T> {
    T::try_from(len).map_err(|_| Error::invariant(format!("{} count {} overflows its field", what, len)))
}

fn offset_u32(offset: usize) -> Result<u32> {
    u32::try_from(offset).map_err(|_| Error::invariant(format!("offset {} exceeds u32", offset)))
}

impl Container {
    pub fn new(header: VoteHeader) -> Self {
        Self {
            header,
            national_questions: Vec::new(),
            worldwide_questions: Vec::new(),
            question_text_info: Vec::new(),
            question_text: Vec::new(),
            national_results: Vec::new(),
            detailed_national_results: Vec::new(),
            position_table: Vec::new(),
            worldwide_results: Vec::new(),
            detailed_worldwide_results: Vec::new(),
            country_info: Vec::new(),
            country_text: Vec::new(),
            size: VoteHeader::SIZE,
            cursor: Section::Header,
            starts: [0; 12],
        }
    }

    /// Bytes measured so far; the absolute offset of the next appended byte.
    pub fn current_size(&self) -> usize {
        self.size
    }

    /// [`current_size`](Self::current_size) as a wire offset.
    pub fn offset(&self) -> Result<u32> {
        offset_u32(self.size)
    }

    pub fn section(&self) -> Section {
        self.cursor
    }

    /// Move the cursor to `section` and return its starting offset.
    ///
    /// Sections skipped on the way start (empty) at the current size.
    pub fn begin(&mut self, section: Section) -> Result<u32> {
        if section <= self.cursor {
            return Err(Error::invariant(format!(
                "section {:?} begun after {:?}",
                section, self.cursor
            )));
        }
        for s in &Section::ALL[self.cursor.index() + 1..=section.index()] {
            self.starts[s.index()] = self.size;
        }
        self.cursor = section;
        debug!(?section, offset = self.size, "begin section");
        self.offset()
    }

    /// Starting offset of a section already begun (or skipped).
    pub fn section_start(&self, section: Section) -> Option<usize> {
        (section <= self.cursor).then(|| self.starts[section.index()])
    }

    pub fn push_national_question(&mut self, record: QuestionInfo) -> Result<usize> {
        append(&mut self.size, self.cursor, Section::NationalQuestions, &mut self.national_questions, record)
    }

    pub fn push_worldwide_question(&mut self, record: QuestionInfo) -> Result<usize> {
        append(&mut self.size, self.cursor, Section::WorldwideQuestions, &mut self.worldwide_questions, record)
    }

    pub fn push_question_text_info(&mut self, record: QuestionTextInfo) -> Result<usize> {
        append(&mut self.size, self.cursor, Section::QuestionTextInfo, &mut self.question_text_info, record)
    }

    pub fn push_national_result(&mut self, record: NationalResult) -> Result<usize> {
        append(&mut self.size, self.cursor, Section::NationalResults, &mut self.national_results, record)
    }

    pub fn push_detailed_national_result(&mut self, record: DetailedNationalResult) -> Result<usize> {
        append(
            &mut self.size,
            self.cursor,
            Section::DetailedNationalResults,
            &mut self.detailed_national_results,
            record,
        )
    }

    pub fn push_worldwide_result(&mut self, record: WorldWideResult) -> Result<usize> {
        append(&mut self.size, self.cursor, Section::WorldwideResults, &mut self.worldwide_results, record)
    }

    pub fn push_detailed_worldwide_result(&mut self, record: DetailedWorldwideResult) -> Result<usize> {
        append(
            &mut self.size,
            self.cursor,
            Section::DetailedWorldwideResults,
            &mut self.detailed_worldwide_results,
            record,
        )
    }

    pub fn push_country_info(&mut self, record: CountryInfoEntry) -> Result<usize> {
        append(&mut self.size, self.cursor, Section::CountryInfo, &mut self.country_info, record)
    }

    /// Copy raw position bytes verbatim.
    pub fn push_position_table(&mut self, bytes: &[u8]) -> Result<()> {
        expect_cursor(self.cursor, Section::PositionTable)?;
        self.position_table.extend_from_slice(bytes);
        self.size += bytes.len();
        Ok(())
    }

    /// Append a question/response string, returning the offset it starts at.
    pub fn push_question_text(&mut self, text: &str) -> Result<u32> {
        expect_cursor(self.cursor, Section::QuestionText)?;
        let offset = self.offset()?;
        let units = encode_text(text);
        self.size += units.len() * 2;
        self.question_text.extend_from_slice(&units);
        Ok(offset)
    }

    /// Append a country name, returning the offset it starts at.
    pub fn push_country_text(&mut self, text: &str) -> Result<u32> {
        expect_cursor(self.cursor, Section::CountryText)?;
        let offset = self.offset()?;
        let units = encode_text(text);
        self.size += units.len() * 2;
        self.country_text.extend_from_slice(&units);
        Ok(offset)
    }

    pub fn question_text_info_mut(&mut self, index: usize) -> Result<&mut QuestionTextInfo> {
        self.question_text_info
            .get_mut(index)
            .ok_or_else(|| Error::invariant(format!("question text entry {} not written", index)))
    }

    pub fn country_info_mut(&mut self, index: usize) -> Result<&mut CountryInfoEntry> {
        self.country_info
            .get_mut(index)
            .ok_or_else(|| Error::invariant(format!("country entry {} not written", index)))
    }

    pub fn national_questions(&self) -> &[QuestionInfo] {
        &self.national_questions
    }

    pub fn worldwide_questions(&self) -> &[QuestionInfo] {
        &self.worldwide_questions
    }

    pub fn question_text_info(&self) -> &[QuestionTextInfo] {
        &self.question_text_info
    }

    pub fn national_results(&self) -> &[NationalResult] {
        &self.national_results
    }

    pub fn detailed_national_results(&self) -> &[DetailedNationalResult] {
        &self.detailed_national_results
    }

    pub fn position_table(&self) -> &[u8] {
        &self.position_table
    }

    pub fn worldwide_results(&self) -> &[WorldWideResult] {
        &self.worldwide_results
    }

    pub fn detailed_worldwide_results(&self) -> &[DetailedWorldwideResult] {
        &self.detailed_worldwide_results
    }

    pub fn country_info(&self) -> &[CountryInfoEntry] {
        &self.country_info
    }

    /// Fill the header's count/offset pairs from what was appended.
    fn fill_table_refs(&mut self) -> Result<()> {
        // Sections never begun start at the end of the container.
        if self.cursor < Section::CountryText {
            self.begin(Section::CountryText)?;
        }
        let start = |s: Section| offset_u32(self.starts[s.index()]);

        let h = &mut self.header;
        h.national_questions = TableRef {
            count: narrow(self.national_questions.len(), "national question")?,
            offset: start(Section::NationalQuestions)?,
        };
        h.worldwide_questions = TableRef {
            count: narrow(self.worldwide_questions.len(), "worldwide question")?,
            offset: start(Section::WorldwideQuestions)?,
        };
        h.question_text_info = TableRef {
            count: narrow(self.question_text_info.len(), "question text info")?,
            offset: start(Section::QuestionTextInfo)?,
        };
        h.national_results = TableRef {
            count: narrow(self.national_results.len(), "national result")?,
            offset: start(Section::NationalResults)?,
        };
        h.detailed_national_results = TableRef {
            count: narrow(self.detailed_national_results.len(), "detailed national result")?,
            offset: start(Section::DetailedNationalResults)?,
        };
        h.position_table = TableRef {
            count: narrow(self.position_table.len(), "position table")?,
            offset: start(Section::PositionTable)?,
        };
        h.worldwide_results = TableRef {
            count: narrow(self.worldwide_results.len(), "worldwide result")?,
            offset: start(Section::WorldwideResults)?,
        };
        h.detailed_worldwide_results = TableRef {
            count: narrow(self.detailed_worldwide_results.len(), "detailed worldwide result")?,
            offset: start(Section::DetailedWorldwideResults)?,
        };
        h.country_info = TableRef {
            count: narrow(self.country_info.len(), "country")?,
            offset: start(Section::CountryInfo)?,
        };
        Ok(())
    }

    fn write_body(&self, buf: &mut Vec<u8>) -> std::io::Result<()> {
        fn records<R: WireRecord>(rs: &[R], buf: &mut Vec<u8>) -> std::io::Result<()> {
            rs.iter().try_for_each(|r| r.write(buf))
        }

        self.header.write(buf)?;
        records(&self.national_questions, buf)?;
        records(&self.worldwide_questions, buf)?;
        records(&self.question_text_info, buf)?;
        write_units(&self.question_text, buf);
        records(&self.national_results, buf)?;
        records(&self.detailed_national_results, buf)?;
        buf.write_all(&self.position_table)?;
        records(&self.worldwide_results, buf)?;
        records(&self.detailed_worldwide_results, buf)?;
        records(&self.country_info, buf)?;
        write_units(&self.country_text, buf);
        Ok(())
    }

    /// Serialize once, verify the measured size and seal the header.
    pub fn finalize(mut self) -> Result<Finalized> {
        self.fill_table_refs()?;
        self.header.filesize = offset_u32(self.size)?;

        let mut bytes = Vec::with_capacity(self.size);
        self.write_body(&mut bytes)
            .map_err(|e| Error::invariant(format!("in-memory write failed: {}", e)))?;

        if bytes.len() != self.size {
            return Err(Error::invariant(format!(
                "wrote {} bytes but measured {}",
                bytes.len(),
                self.size
            )));
        }

        self.header.crc32 = seal(&mut bytes);
        debug!(
            filesize = self.header.filesize,
            crc32 = %format!("{:08x}", self.header.crc32),
            "container sealed"
        );

        Ok(Finalized {
            header: self.header,
            bytes,
        })
    }
}
