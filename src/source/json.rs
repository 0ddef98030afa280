// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory data source loaded from a JSON export.
//!
//! ```json
//! {
//!   "questions": [
//!     { "id": 101, "kind": "national", "date": "2025-01-27T00:00:00Z",
//!       "text": { "english": "...", "german": "..." },
//!       "response1": { "english": "Yes" }, "response2": { "english": "No" } }
//!   ],
//!   "votes": [
//!     { "question_id": 90, "kind": "vote", "country_id": 18, "region_id": 2, "tally": "1203" }
//!   ]
//! }
//! ```
//!
//! The windows below mirror the queries the relational store answers.
//! Sessions are cheap borrows of the loaded dataset.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::{
    DataSource, PollKind, Question, Session, VoteRecord, MAX_NATIONAL_QUESTIONS,
    NATIONAL_POLL_DAYS, WORLDWIDE_POLL_DAYS,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonDataset {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub votes: Vec<VoteRecord>,
}

/// Accept a tally as either `"1203"` or `1203`.
pub(crate) fn tally_digits<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(d)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

impl JsonDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::data(format!("invalid dataset JSON: {}", e)))
    }

    /// Load a dataset and wrap question text to `wrap_width` columns.
    pub fn load(path: &Path, wrap_width: usize) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let dataset = Self::from_json(&content)
            .map_err(|e| Error::data(format!("{}: {}", path.display(), e)))?;
        Ok(dataset.wrapped(wrap_width))
    }

    pub fn wrapped(mut self, wrap_width: usize) -> Self {
        self.questions = self
            .questions
            .into_iter()
            .map(|q| q.wrapped(wrap_width))
            .collect();
        self
    }

    fn questions_of(&self, kind: PollKind) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.kind == kind)
    }

    /// Questions of `kind` opened in `(now - days, now]`, oldest first.
    fn live(&self, kind: PollKind, now: DateTime<Utc>, days: i64) -> Vec<Question> {
        let since = now - chrono::Duration::days(days);
        let mut live: Vec<Question> = self
            .questions_of(kind)
            .filter(|q| q.date > since && q.date <= now)
            .cloned()
            .collect();
        live.sort_by_key(|q| (q.date, q.id));
        live
    }

    /// Ids of questions of `kind` opened on or before `now - days`, newest first.
    fn closed(&self, kind: PollKind, now: DateTime<Utc>, days: i64) -> Vec<u32> {
        let until = now - chrono::Duration::days(days);
        let mut closed: Vec<&Question> = self
            .questions_of(kind)
            .filter(|q| q.date <= until)
            .collect();
        closed.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        closed.into_iter().map(|q| q.id).collect()
    }
}

impl DataSource for JsonDataset {
    fn open_session(&self) -> Result<Box<dyn Session + '_>> {
        Ok(Box::new(JsonSession { dataset: self }))
    }
}

struct JsonSession<'a> {
    dataset: &'a JsonDataset,
}

impl Session for JsonSession<'_> {
    fn national_questions(&mut self, now: DateTime<Utc>) -> Result<Vec<Question>> {
        let mut live = self.dataset.live(PollKind::National, now, NATIONAL_POLL_DAYS);
        live.truncate(MAX_NATIONAL_QUESTIONS);
        Ok(live)
    }

    fn worldwide_questions(&mut self, now: DateTime<Utc>) -> Result<Vec<Question>> {
        let mut live = self.dataset.live(PollKind::Worldwide, now, WORLDWIDE_POLL_DAYS);
        live.truncate(1);
        Ok(live)
    }

    fn national_results(&mut self, now: DateTime<Utc>, limit: usize) -> Result<Vec<u32>> {
        let mut closed = self.dataset.closed(PollKind::National, now, NATIONAL_POLL_DAYS);
        closed.truncate(limit);
        Ok(closed)
    }

    fn worldwide_result(&mut self, now: DateTime<Utc>) -> Result<Option<u32>> {
        Ok(self
            .dataset
            .closed(PollKind::Worldwide, now, WORLDWIDE_POLL_DAYS)
            .first()
            .copied())
    }

    fn votes(&mut self, question_id: u32, country: Option<u8>) -> Result<Vec<VoteRecord>> {
        Ok(self
            .dataset
            .votes
            .iter()
            .filter(|v| v.question_id == question_id)
            .filter(|v| country.map_or(true, |c| v.country_id == c))
            .cloned()
            .collect())
    }
}
