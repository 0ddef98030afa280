// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! National results, detailed per-region results, and the position table.
//!
//! Each closed poll yields one [`NationalResult`] and exactly `regions`
//! detailed entries, so result `i` owns the detailed slice starting at
//! `regions * i`. Region ids from the store are offset: id 1 is the country
//! itself and regions start at [`REGION_ID_BASE`].
//!
//! When the country has map data, each detailed entry carries a pointer equal
//! to the sum of the position table bytes for every earlier region. A region
//! that received a vote also carries its position count (its own byte of the
//! table); regions without votes keep a count of 0. The table itself is
//! copied verbatim after the detailed results.

use tracing::warn;

use crate::binary::{format_tally, Container, DetailedNationalResult, NationalResult, Section};
use crate::error::{Error, Result};
use crate::reference::CountryInfo;
use crate::source::VoteKind;

use super::{ClosedPoll, TargetContext};

/// Raw region id of the first region.
pub const REGION_ID_BASE: u16 = 2;

/// Zero-based region slot for a raw region id, if it names a region.
fn region_slot(region_id: u16, regions: u8) -> Option<usize> {
    let slot = region_id.checked_sub(REGION_ID_BASE)? as usize;
    (slot < usize::from(regions)).then_some(slot)
}

/// Position table byte for a region slot, or 0 past the table or without map data.
fn position_count(country: &CountryInfo, slot: usize) -> u8 {
    country
        .position_table()
        .and_then(|table| table.get(slot).copied())
        .unwrap_or(0)
}

/// Position pointers for every region; all zero without map data.
fn position_pointers(country: &CountryInfo) -> Vec<u32> {
    let mut pointer = 0u32;
    (0..usize::from(country.regions))
        .map(|i| {
            let entry = pointer;
            pointer += u32::from(position_count(country, i));
            entry
        })
        .collect()
}

/// Tally one closed poll. `index` is the poll's position in the results table.
pub fn tally_national(
    country: &CountryInfo,
    poll: &ClosedPoll,
    index: usize,
) -> Result<(NationalResult, Vec<DetailedNationalResult>)> {
    let detailed_start = u32::try_from(usize::from(country.regions) * index)
        .map_err(|_| Error::invariant("detailed national start overflows u32"))?;

    let mut result = NationalResult {
        poll_id: poll.id,
        show_voter_number: 1,
        show_detailed_results: u8::from(country.has_map() && !poll.votes.is_empty()),
        detailed_count: country.regions,
        detailed_start,
        ..Default::default()
    };

    let mut detailed: Vec<DetailedNationalResult> = position_pointers(country)
        .into_iter()
        .map(|position_entry| DetailedNationalResult {
            position_entry,
            ..Default::default()
        })
        .collect();

    for vote in &poll.votes {
        let slots = format_tally(&vote.tally);
        match vote.kind {
            VoteKind::Vote => {
                result.tallies.add_vote(slots);
                match region_slot(vote.region_id, country.regions) {
                    Some(slot) => {
                        detailed[slot].response1 += slots[0] + slots[1];
                        detailed[slot].response2 += slots[2] + slots[3];
                        detailed[slot].position_count = position_count(country, slot);
                    }
                    None => warn!(
                        country = country.code,
                        poll = poll.id,
                        region_id = vote.region_id,
                        "vote outside the country's regions; counted in totals only"
                    ),
                }
            }
            VoteKind::Prediction => result.tallies.add_prediction(slots),
        }
    }

    Ok((result, detailed))
}

pub fn build(c: &mut Container, ctx: &TargetContext<'_>, polls: &[ClosedPoll]) -> Result<()> {
    let mut tallied = Vec::with_capacity(polls.len());
    for (index, poll) in polls.iter().enumerate() {
        tallied.push(tally_national(ctx.country, poll, index)?);
    }

    c.begin(Section::NationalResults)?;
    for (result, _) in &tallied {
        c.push_national_result(result.clone())?;
    }

    c.begin(Section::DetailedNationalResults)?;
    for (_, detailed) in tallied {
        for entry in detailed {
            c.push_detailed_national_result(entry)?;
        }
    }

    c.begin(Section::PositionTable)?;
    if !polls.is_empty() {
        if let Some(table) = ctx.country.position_table() {
            c.push_position_table(table)?;
        }
    }

    Ok(())
}
