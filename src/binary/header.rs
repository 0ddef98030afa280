// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Container header.
//!
//! The header is 69 bytes of packed big-endian fields with no alignment
//! padding. The first three words (version, filesize, CRC32) are excluded
//! from the checksum: the CRC covers `bytes[12..]`, so patching the size
//! and checksum in place never invalidates the checksum itself.
//!
//! Every table has a count and an absolute byte offset. Counts use the
//! narrowest width the reader expects (u8 for tables capped at a handful of
//! entries, u16 for per-region and per-country tables).

use std::io::{self, Write};

use crc32fast::Hasher as Crc32Hasher;

/// Container format version written to every header.
pub const VERSION: u32 = 0;

/// Byte offset of the filesize field.
pub const FILESIZE_OFFSET: usize = 4;

/// Byte offset of the CRC32 field.
pub const CRC32_OFFSET: usize = 8;

/// First byte covered by the checksum (everything after version/size/crc).
pub const CRC_START: usize = 12;

/// Count and absolute byte offset of one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableRef<C> {
    pub count: C,
    pub offset: u32,
}

/// Container header (69 bytes fixed size).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteHeader {
    pub version: u32,
    pub filesize: u32,
    pub crc32: u32,
    /// Generation time, minutes since 2000-01-01.
    pub timestamp: u32,
    pub country_code: u8,
    pub publicity_flag: u8,
    pub question_version: u8,
    pub result_version: u8,
    pub national_questions: TableRef<u8>,
    pub worldwide_questions: TableRef<u8>,
    pub question_text_info: TableRef<u8>,
    pub national_results: TableRef<u8>,
    pub detailed_national_results: TableRef<u16>,
    pub position_table: TableRef<u16>,
    pub worldwide_results: TableRef<u8>,
    pub detailed_worldwide_results: TableRef<u16>,
    pub country_info: TableRef<u16>,
}

impl VoteHeader {
    // 4*4 (words) + 4 (flags) + 5*(1+4) + 4*(2+4) = 16 + 4 + 25 + 24 = 69
    pub const SIZE: usize = 69;

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.version.to_be_bytes())?;
        w.write_all(&self.filesize.to_be_bytes())?;
        w.write_all(&self.crc32.to_be_bytes())?;
        w.write_all(&self.timestamp.to_be_bytes())?;
        w.write_all(&[
            self.country_code,
            self.publicity_flag,
            self.question_version,
            self.result_version,
        ])?;
        write_ref8(w, self.national_questions)?;
        write_ref8(w, self.worldwide_questions)?;
        write_ref8(w, self.question_text_info)?;
        write_ref8(w, self.national_results)?;
        write_ref16(w, self.detailed_national_results)?;
        write_ref16(w, self.position_table)?;
        write_ref8(w, self.worldwide_results)?;
        write_ref16(w, self.detailed_worldwide_results)?;
        write_ref16(w, self.country_info)?;
        Ok(())
    }
}

fn write_ref8<W: Write>(w: &mut W, r: TableRef<u8>) -> io::Result<()> {
    w.write_all(&[r.count])?;
    w.write_all(&r.offset.to_be_bytes())
}

fn write_ref16<W: Write>(w: &mut W, r: TableRef<u16>) -> io::Result<()> {
    w.write_all(&r.count.to_be_bytes())?;
    w.write_all(&r.offset.to_be_bytes())
}

/// CRC32 (IEEE) over the checksummed region of a finalized buffer.
pub fn body_crc32(bytes: &[u8]) -> u32 {
    let mut hasher = Crc32Hasher::new();
    hasher.update(bytes.get(CRC_START..).unwrap_or_default());
    hasher.finalize()
}

/// Patch filesize and CRC32 into a serialized buffer in place.
///
/// Returns the checksum that was written.
pub fn seal(bytes: &mut [u8]) -> u32 {
    let filesize = bytes.len() as u32;
    let crc = body_crc32(bytes);
    if bytes.len() >= CRC_START {
        bytes[FILESIZE_OFFSET..CRC32_OFFSET].copy_from_slice(&filesize.to_be_bytes());
        bytes[CRC32_OFFSET..CRC_START].copy_from_slice(&crc.to_be_bytes());
    }
    crc
}

/// Read a big-endian u32 at `offset`, if in bounds.
pub fn read_u32_be(bytes: &[u8], offset: usize) -> Option<u32> {
    let b = bytes.get(offset..offset + 4)?;
    Some(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}
