// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The companion `first.bin` container: which countries exist and which
//! languages each one reads.
//!
//! ```text
//! version u32 (=1) │ filesize u32 │ crc32 u32 │ countries u8
//! │ country_table_offset u32 │ languages u8          (18 bytes)
//! languages × name_offset u32
//! countries × { code u8 │ language_count u8 │ languages [u8; 4] }
//! language names, UTF-16 null-terminated
//! ```
//!
//! Sealed and signed exactly like a vote container.

use std::io::Write;

use crate::binary::{encode_text, encoded_text_len, seal, write_units};
use crate::error::{Error, Result};
use crate::reference::{Language, COUNTRIES};

pub const FIRST_DATA_VERSION: u32 = 1;

/// Fixed fields ahead of the language offset table.
const PREAMBLE_SIZE: usize = 18;

/// Language slots per country record.
const COUNTRY_LANGUAGE_SLOTS: usize = 4;

const COUNTRY_RECORD_SIZE: usize = 2 + COUNTRY_LANGUAGE_SLOTS;

fn u32_field(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::invariant(format!("{} {} exceeds u32", what, value)))
}

fn u8_field(value: usize, what: &str) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::invariant(format!("{} {} exceeds u8", what, value)))
}

/// Build and seal the first-data container.
pub fn build_first_data() -> Result<Vec<u8>> {
    let languages = Language::ALL;
    let country_table_offset = PREAMBLE_SIZE + 4 * languages.len();
    let text_start = country_table_offset + COUNTRY_RECORD_SIZE * COUNTRIES.len();
    let size = text_start
        + languages
            .iter()
            .map(|l| encoded_text_len(l.native_name()))
            .sum::<usize>();

    let mut buf = Vec::with_capacity(size);
    let io_err = |e: std::io::Error| Error::invariant(format!("in-memory write failed: {}", e));

    buf.write_all(&FIRST_DATA_VERSION.to_be_bytes()).map_err(io_err)?;
    // filesize and crc32, sealed below
    buf.write_all(&[0; 8]).map_err(io_err)?;
    buf.push(u8_field(COUNTRIES.len(), "country count")?);
    buf.write_all(&u32_field(country_table_offset, "country table offset")?.to_be_bytes())
        .map_err(io_err)?;
    buf.push(u8_field(languages.len(), "language count")?);

    let mut offset = text_start;
    for lang in languages {
        buf.write_all(&u32_field(offset, "language name offset")?.to_be_bytes())
            .map_err(io_err)?;
        offset += encoded_text_len(lang.native_name());
    }

    for country in COUNTRIES {
        if country.languages.len() > COUNTRY_LANGUAGE_SLOTS {
            return Err(Error::invariant(format!(
                "country {} reads {} languages, more than a record holds",
                country.code,
                country.languages.len()
            )));
        }
        let mut slots = [0u8; COUNTRY_LANGUAGE_SLOTS];
        for (slot, lang) in slots.iter_mut().zip(country.languages) {
            *slot = lang.code();
        }
        buf.push(country.code);
        buf.push(u8_field(country.languages.len(), "language count")?);
        buf.extend_from_slice(&slots);
    }

    for lang in languages {
        write_units(&encode_text(lang.native_name()), &mut buf);
    }

    if buf.len() != size {
        return Err(Error::invariant(format!(
            "first data wrote {} bytes but measured {}",
            buf.len(),
            size
        )));
    }
    seal(&mut buf);
    Ok(buf)
}
