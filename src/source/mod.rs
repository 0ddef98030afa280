// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Data-source boundary: questions and raw vote rows.
//!
//! The relational store itself lives elsewhere. This module defines what the
//! layout engine needs from it and nothing more: the live questions for a
//! run date, the closed questions whose results are due, and the raw vote
//! rows for one question.
//!
//! Each target opens its own [`Session`]. Parallel per-country runs must not
//! share one; a shared connection was observed to stall under load.

pub mod json;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::reference::Language;
use crate::util::wrap_text;

pub use json::JsonDataset;

/// National polls stay open for a week.
pub const NATIONAL_POLL_DAYS: i64 = 7;

/// Worldwide polls stay open for fifteen days.
pub const WORLDWIDE_POLL_DAYS: i64 = 15;

/// Live national questions carried per file.
pub const MAX_NATIONAL_QUESTIONS: usize = 3;

/// Closed national questions whose results a normal file carries.
pub const MAX_NATIONAL_RESULTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollKind {
    National,
    Worldwide,
}

impl PollKind {
    pub fn duration(self) -> Duration {
        match self {
            PollKind::National => Duration::days(NATIONAL_POLL_DAYS),
            PollKind::Worldwide => Duration::days(WORLDWIDE_POLL_DAYS),
        }
    }
}

/// One string in every language the reader knows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    pub japanese: String,
    pub english: String,
    pub german: String,
    pub french: String,
    pub spanish: String,
    pub italian: String,
    pub dutch: String,
    pub portuguese: String,
    pub french_canadian: String,
}

impl LocalizedText {
    /// Text for `language`. Japanese falls back to English when the dataset
    /// carries no translation.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Japanese if !self.japanese.is_empty() => &self.japanese,
            Language::Japanese | Language::English => &self.english,
            Language::German => &self.german,
            Language::French => &self.french,
            Language::Spanish => &self.spanish,
            Language::Italian => &self.italian,
            Language::Dutch => &self.dutch,
            Language::Portuguese => &self.portuguese,
            Language::FrenchCanadian => &self.french_canadian,
        }
    }

    pub fn map(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            japanese: f(&self.japanese),
            english: f(&self.english),
            german: f(&self.german),
            french: f(&self.french),
            spanish: f(&self.spanish),
            italian: f(&self.italian),
            dutch: f(&self.dutch),
            portuguese: f(&self.portuguese),
            french_canadian: f(&self.french_canadian),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: u32,
    pub kind: PollKind,
    pub text: LocalizedText,
    pub response1: LocalizedText,
    pub response2: LocalizedText,
    #[serde(default)]
    pub category: u8,
    #[serde(default)]
    pub category2: u8,
    /// Poll opening date.
    pub date: DateTime<Utc>,
    /// Poll closing date; defaults to `date` plus the poll duration.
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl Question {
    pub fn start(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end.unwrap_or(self.date + self.kind.duration())
    }

    /// Apply line wrapping to every string. Done once, at load time.
    pub fn wrapped(mut self, width: usize) -> Self {
        let wrap = |s: &str| wrap_text(s, width);
        self.text = self.text.map(wrap);
        self.response1 = self.response1.map(wrap);
        self.response2 = self.response2.map(wrap);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteKind {
    Vote,
    Prediction,
}

/// One raw row from the votes table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoteRecord {
    pub question_id: u32,
    pub kind: VoteKind,
    pub country_id: u8,
    pub region_id: u16,
    /// Packed decimal tally, see [`crate::binary::format_tally`].
    #[serde(deserialize_with = "json::tally_digits")]
    pub tally: String,
}

/// A source of questions and votes that hands out per-target sessions.
pub trait DataSource: Sync {
    fn open_session(&self) -> Result<Box<dyn Session + '_>>;
}

/// Queries one target needs, relative to a run date `now`.
pub trait Session {
    /// National questions opened in the last week, oldest first, at most three.
    fn national_questions(&mut self, now: DateTime<Utc>) -> Result<Vec<Question>>;

    /// The worldwide question opened in the last fifteen days, if any.
    fn worldwide_questions(&mut self, now: DateTime<Utc>) -> Result<Vec<Question>>;

    /// Closed national question ids, newest first.
    fn national_results(&mut self, now: DateTime<Utc>, limit: usize) -> Result<Vec<u32>>;

    /// The newest closed worldwide question id.
    fn worldwide_result(&mut self, now: DateTime<Utc>) -> Result<Option<u32>>;

    /// Vote rows for a question, optionally for one country only.
    fn votes(&mut self, question_id: u32, country: Option<u8>) -> Result<Vec<VoteRecord>>;
}
