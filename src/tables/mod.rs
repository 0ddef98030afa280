// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Table builders and the per-target assembly order.
//!
//! One run builds one container for one country. Everything a run touches
//! lives in a [`TargetContext`] and a fresh [`Container`], both dropped after
//! finalize, so nothing can leak between countries or between runs.
//!
//! Assembly is two stages. [`TargetData::fetch`] does all the I/O against a
//! source session (and applies the file-type and locality gating by simply
//! not fetching what the file doesn't carry). [`assemble`] is then pure
//! layout: builders run in wire order, each reading `current_size()` for the
//! offsets it needs.
//!
//! ```text
//! questions ──▶ national ──▶ worldwide ──▶ countries ──▶ finalize
//!  (4 sections)  (3 sections)  (2 sections)  (2 sections)
//! ```

pub mod countries;
pub mod national;
pub mod questions;
pub mod worldwide;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::binary::{timestamp, Container, Finalized, VoteHeader, VERSION};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::reference::{require_country, CountryInfo};
use crate::source::{DataSource, Question, Session, VoteRecord};

pub use national::{tally_national, REGION_ID_BASE};
pub use worldwide::{prune_detailed, tally_worldwide, COUNTRY_TABLE_STRIDE};

/// Everything one target's builders may read.
#[derive(Debug, Clone, Copy)]
pub struct TargetContext<'a> {
    pub country: &'static CountryInfo,
    /// Run date; drives both poll windows and the header timestamp.
    pub now: DateTime<Utc>,
    pub config: &'a GeneratorConfig,
}

impl<'a> TargetContext<'a> {
    pub fn new(country_code: u8, now: DateTime<Utc>, config: &'a GeneratorConfig) -> Result<Self> {
        Ok(Self {
            country: require_country(country_code)?,
            now,
            config,
        })
    }

    fn header(&self) -> VoteHeader {
        VoteHeader {
            version: VERSION,
            timestamp: timestamp(self.now),
            country_code: self.country.code,
            publicity_flag: self.config.publicity_flag,
            question_version: self.config.question_version,
            result_version: self.config.result_version,
            ..Default::default()
        }
    }
}

/// A closed poll with its raw vote rows.
#[derive(Debug, Clone, Default)]
pub struct ClosedPoll {
    pub id: u32,
    pub votes: Vec<VoteRecord>,
}

/// Inputs for one target, already gated by file type and locality.
#[derive(Debug, Clone, Default)]
pub struct TargetData {
    pub national_questions: Vec<Question>,
    pub worldwide_questions: Vec<Question>,
    pub national_results: Vec<ClosedPoll>,
    pub worldwide_result: Option<ClosedPoll>,
}

impl TargetData {
    pub fn fetch(session: &mut dyn Session, ctx: &TargetContext<'_>) -> Result<Self> {
        let config = ctx.config;
        let national = config.locality.has_national();
        let worldwide = config.locality.has_worldwide();
        let mut data = TargetData::default();

        if config.file_type.has_questions() {
            if national {
                data.national_questions = session.national_questions(ctx.now)?;
            }
            if worldwide {
                data.worldwide_questions = session.worldwide_questions(ctx.now)?;
            }
        }

        if config.file_type.has_results() {
            if national {
                for id in session.national_results(ctx.now, config.national_result_limit())? {
                    let votes = session.votes(id, Some(ctx.country.code))?;
                    data.national_results.push(ClosedPoll { id, votes });
                }
            }
            if worldwide {
                if let Some(id) = session.worldwide_result(ctx.now)? {
                    let votes = session.votes(id, None)?;
                    data.worldwide_result = Some(ClosedPoll { id, votes });
                }
            }
        }

        debug!(
            country = ctx.country.code,
            national_questions = data.national_questions.len(),
            worldwide_questions = data.worldwide_questions.len(),
            national_results = data.national_results.len(),
            worldwide_result = data.worldwide_result.is_some(),
            "fetched target data"
        );
        Ok(data)
    }
}

/// Lay out and seal one container.
pub fn assemble(ctx: &TargetContext<'_>, data: &TargetData) -> Result<Finalized> {
    let mut container = Container::new(ctx.header());

    questions::build(&mut container, ctx, &data.national_questions, &data.worldwide_questions)?;
    national::build(&mut container, ctx, &data.national_results)?;
    worldwide::build(&mut container, ctx, data.worldwide_result.as_ref())?;
    countries::build(&mut container)?;

    let finalized = container.finalize()?;
    info!(
        country = ctx.country.code,
        bytes = finalized.bytes.len(),
        crc32 = %format!("{:08x}", finalized.header.crc32),
        "container assembled"
    );
    Ok(finalized)
}

/// Fetch through a fresh session, then assemble.
pub fn generate(source: &dyn DataSource, ctx: &TargetContext<'_>) -> Result<Finalized> {
    let mut session = source.open_session()?;
    let data = TargetData::fetch(session.as_mut(), ctx)?;
    drop(session);
    assemble(ctx, &data)
}
