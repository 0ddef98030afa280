// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Country info table and country-name text.
//!
//! Independent of the target: every file lists all known countries, one
//! entry per UI language, with text offsets patched in as the names are
//! appended.

use crate::binary::{Container, CountryInfoEntry, Section};
use crate::error::Result;
use crate::reference::{COUNTRIES, UI_LANGUAGES};

pub fn build(c: &mut Container) -> Result<()> {
    c.begin(Section::CountryInfo)?;
    for _ in COUNTRIES {
        for lang in UI_LANGUAGES {
            c.push_country_info(CountryInfoEntry {
                language: lang.code(),
                text_offset: 0,
            })?;
        }
    }

    c.begin(Section::CountryText)?;
    let mut index = 0;
    for country in COUNTRIES {
        for name in country.names {
            let offset = c.push_country_text(name)?;
            c.country_info_mut(index)?.text_offset = offset;
            index += 1;
        }
    }

    Ok(())
}
