//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, TimeZone, Utc};

use crate::source::{JsonDataset, LocalizedText, PollKind, Question, VoteKind, VoteRecord};

/// The dataset in `data/fixtures/dataset.json`, wrapped at the default width.
///
/// Relative to [`sample_now`] it holds two live national questions (103,
/// 104), two closed ones (102 newest, then 101), one live worldwide question
/// (202) and one closed (201).
pub fn sample_dataset() -> JsonDataset {
    JsonDataset::from_json(include_str!("../data/fixtures/dataset.json"))
        .map(|d| d.wrapped(50))
        .unwrap_or_default()
}

/// Run date the sample dataset is laid out around: 2025-02-01T00:00:00Z.
pub fn sample_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// A national question with the same English text in every language slot
/// and distinct responses.
pub fn question(id: u32, text: &str) -> Question {
    let all = |s: &str| LocalizedText::default().map(|_| s.to_string());

    Question {
        id,
        kind: PollKind::National,
        text: all(text),
        response1: all("Yes"),
        response2: all("No"),
        category: 0,
        category2: 0,
        date: sample_now(),
        end: None,
    }
}

pub fn vote(question_id: u32, kind: VoteKind, country_id: u8, region_id: u16, tally: &str) -> VoteRecord {
    VoteRecord {
        question_id,
        kind,
        country_id,
        region_id,
        tally: tally.to_string(),
    }
}
