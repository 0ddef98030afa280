// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run configuration: which file to build and how.
//!
//! File type and locality gate which table builders run. They come from the
//! command line as single letters (`v`/`r`/`q`, `n`/`w`) and can be defaulted
//! from a JSON config file.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Which tables a file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// Questions and results (`voting.bin`).
    #[default]
    Normal,
    /// Results only (`MMDD_r.bin`).
    Results,
    /// Questions only (`MMDD_q.bin`).
    Questions,
}

impl FileType {
    pub fn has_questions(self) -> bool {
        self != FileType::Results
    }

    pub fn has_results(self) -> bool {
        self != FileType::Questions
    }
}

impl FromStr for FileType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "v" | "normal" => Ok(FileType::Normal),
            "r" | "results" => Ok(FileType::Results),
            "q" | "questions" => Ok(FileType::Questions),
            other => Err(Error::Config(format!("unknown file type '{}'", other))),
        }
    }
}

/// Which polls a file covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locality {
    National,
    Worldwide,
    #[default]
    All,
}

impl Locality {
    pub fn has_national(self) -> bool {
        self != Locality::Worldwide
    }

    pub fn has_worldwide(self) -> bool {
        self != Locality::National
    }

    /// Parse the single-letter selector. Anything unrecognized means both.
    pub fn from_flag(s: &str) -> Self {
        match s {
            "n" | "national" => Locality::National,
            "w" | "worldwide" => Locality::Worldwide,
            _ => Locality::All,
        }
    }
}

/// How countries without votes are dropped from detailed worldwide results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruneStrategy {
    /// Drop every country that recorded no votes.
    #[default]
    AllEmpty,
    /// Drop only the trailing run of countries without votes.
    TrailingOnly,
}

/// Header constants and builder options shared by every target of a run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub file_type: FileType,
    pub locality: Locality,
    pub prune: PruneStrategy,
    /// Column width questions are wrapped to when loaded.
    pub wrap_width: usize,
    pub publicity_flag: u8,
    pub question_version: u8,
    pub result_version: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            file_type: FileType::Normal,
            locality: Locality::All,
            prune: PruneStrategy::AllEmpty,
            wrap_width: 50,
            publicity_flag: 0,
            question_version: 1,
            result_version: 0,
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: GeneratorConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.wrap_width == 0 {
            return Err(Error::Config("wrap_width must be at least 1".into()));
        }
        Ok(())
    }

    /// National results carried per file; results-only files carry one.
    pub fn national_result_limit(&self) -> usize {
        match self.file_type {
            FileType::Results => 1,
            _ => 6,
        }
    }
}
