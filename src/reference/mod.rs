// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only reference tables: languages, countries, regions, map positions.
//!
//! Everything here is immutable for the lifetime of the process, so it is
//! safe to share between parallel per-country runs without locking. Lookups
//! go through the [`Language`] enum and the [`COUNTRIES`] slice rather than
//! integer-keyed maps: an unknown code is an explicit `None`, never a silent
//! default.

mod countries;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use countries::COUNTRIES;

/// Language codes understood by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Language {
    Japanese = 0,
    English = 1,
    German = 2,
    French = 3,
    Spanish = 4,
    Italian = 5,
    Dutch = 6,
    Portuguese = 7,
    FrenchCanadian = 8,
}

impl Language {
    /// Every language, in code order.
    pub const ALL: [Language; 9] = [
        Language::Japanese,
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Dutch,
        Language::Portuguese,
        Language::FrenchCanadian,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Language> {
        Language::ALL.get(usize::from(code)).copied()
    }

    /// Native display name, as shown in the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Japanese => "日本語",
            Language::English => "English",
            Language::German => "Deutsch",
            Language::French | Language::FrenchCanadian => "Français",
            Language::Spanish => "Español",
            Language::Italian => "Italiano",
            Language::Dutch => "Nederlands",
            Language::Portuguese => "Português",
        }
    }
}

/// Languages the country-name table is written in, in table order.
pub const UI_LANGUAGES: [Language; 7] = [
    Language::Japanese,
    Language::English,
    Language::German,
    Language::French,
    Language::Spanish,
    Language::Italian,
    Language::Dutch,
];

/// Console region a country's units ship with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleRegion {
    Japan,
    Pal,
    Ntsc,
}

/// Static description of one supported country.
#[derive(Debug)]
pub struct CountryInfo {
    pub code: u8,
    /// Administrative regions shown in detailed national results.
    pub regions: u8,
    pub languages: &'static [Language],
    pub console_region: ConsoleRegion,
    /// Hex-encoded map position table, absent when no map layout is known.
    position_hex: Option<&'static str>,
    /// Country name in each of [`UI_LANGUAGES`].
    pub names: [&'static str; 7],
}

impl CountryInfo {
    /// Decoded position table, or `None` for countries without map data.
    pub fn position_table(&self) -> Option<&'static [u8]> {
        let index = self.index();
        position_tables()[index].as_deref()
    }

    pub fn has_map(&self) -> bool {
        self.position_hex.is_some()
    }

    /// Position of this country in [`COUNTRIES`].
    pub fn index(&self) -> usize {
        COUNTRIES
            .iter()
            .position(|c| c.code == self.code)
            .unwrap_or_default()
    }
}

fn position_tables() -> &'static [Option<Vec<u8>>] {
    static TABLES: OnceLock<Vec<Option<Vec<u8>>>> = OnceLock::new();
    TABLES.get_or_init(|| {
        COUNTRIES
            .iter()
            .map(|c| c.position_hex.and_then(|h| hex::decode(h).ok()))
            .collect()
    })
}

/// Look up a country by code.
pub fn country(code: u8) -> Option<&'static CountryInfo> {
    COUNTRIES.iter().find(|c| c.code == code)
}

/// Like [`country`], but an unknown code is a layout error.
pub fn require_country(code: u8) -> Result<&'static CountryInfo> {
    country(code).ok_or(Error::UnknownCountry(code))
}

/// Index of a country code in [`COUNTRIES`] (the worldwide table order).
pub fn country_index(code: u8) -> Option<usize> {
    COUNTRIES.iter().position(|c| c.code == code)
}

pub fn country_codes() -> impl Iterator<Item = u8> {
    COUNTRIES.iter().map(|c| c.code)
}
