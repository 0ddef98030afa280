// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Worldwide result and its per-country breakdown.
//!
//! The breakdown starts with one entry per known country, in [`COUNTRIES`]
//! order. A country that recorded a vote gets a pointer into the reader's
//! country-name table, which holds [`COUNTRY_TABLE_STRIDE`] names per
//! country, so the pointer is `index * stride` and stays fixed whatever gets
//! pruned around it. Entries without votes are then pruned per
//! [`PruneStrategy`].
//!
//! Totals count every vote row, including rows from countries that are not
//! in the table; those simply have no breakdown entry.
//!
//! [`COUNTRIES`]: crate::reference::COUNTRIES

use tracing::{debug, warn};

use crate::binary::{format_tally, Container, DetailedWorldwideResult, Section, WorldWideResult};
use crate::config::PruneStrategy;
use crate::error::{Error, Result};
use crate::reference::{country_index, COUNTRIES, UI_LANGUAGES};
use crate::source::VoteKind;

use super::{ClosedPoll, TargetContext};

/// Country-name entries per country in the reader's country table.
pub const COUNTRY_TABLE_STRIDE: usize = UI_LANGUAGES.len();

/// Drop entries without votes. Safe to apply more than once.
pub fn prune_detailed(entries: &mut Vec<DetailedWorldwideResult>, strategy: PruneStrategy) {
    match strategy {
        PruneStrategy::AllEmpty => {
            // walk in reverse so removals never shift an unvisited entry
            for i in (0..entries.len()).rev() {
                if !entries[i].has_votes() {
                    entries.remove(i);
                }
            }
        }
        PruneStrategy::TrailingOnly => {
            while entries.last().is_some_and(|e| !e.has_votes()) {
                entries.pop();
            }
        }
    }
}

/// Tally the worldwide poll and build its pruned per-country breakdown.
pub fn tally_worldwide(
    poll: &ClosedPoll,
    strategy: PruneStrategy,
) -> Result<(WorldWideResult, Vec<DetailedWorldwideResult>)> {
    let mut result = WorldWideResult {
        poll_id: poll.id,
        ..Default::default()
    };
    let mut detailed = vec![DetailedWorldwideResult::default(); COUNTRIES.len()];
    let stride = COUNTRY_TABLE_STRIDE as u16;

    for vote in &poll.votes {
        let slots = format_tally(&vote.tally);
        match vote.kind {
            VoteKind::Vote => {
                result.tallies.add_vote(slots);
                match country_index(vote.country_id) {
                    Some(i) => {
                        detailed[i].add_vote(slots);
                        detailed[i].country_table_count = stride;
                    }
                    None => warn!(
                        poll = poll.id,
                        country_id = vote.country_id,
                        "vote from a country outside the table; counted in totals only"
                    ),
                }
            }
            VoteKind::Prediction => result.tallies.add_prediction(slots),
        }
    }

    for (i, entry) in detailed.iter_mut().enumerate() {
        if entry.has_votes() {
            entry.country_table_entry = u32::try_from(i * COUNTRY_TABLE_STRIDE)
                .map_err(|_| Error::invariant("country table pointer overflows u32"))?;
        }
    }

    prune_detailed(&mut detailed, strategy);
    result.detailed_count = u8::try_from(detailed.len())
        .map_err(|_| Error::invariant("detailed worldwide count overflows u8"))?;
    result.detailed_start = 0;

    debug!(
        poll = poll.id,
        countries = detailed.len(),
        voters = result.tallies.voters(),
        "tallied worldwide result"
    );
    Ok((result, detailed))
}

pub fn build(c: &mut Container, ctx: &TargetContext<'_>, poll: Option<&ClosedPoll>) -> Result<()> {
    let tallied = poll
        .map(|p| tally_worldwide(p, ctx.config.prune))
        .transpose()?;

    c.begin(Section::WorldwideResults)?;
    if let Some((result, _)) = &tallied {
        c.push_worldwide_result(result.clone())?;
    }

    c.begin(Section::DetailedWorldwideResults)?;
    if let Some((_, detailed)) = tallied {
        for entry in detailed {
            c.push_detailed_worldwide_result(entry)?;
        }
    }

    Ok(())
}
