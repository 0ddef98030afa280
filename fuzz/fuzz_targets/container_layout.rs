// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for container assembly.
//!
//! Arbitrary questions and vote rows go in; a sealed container whose size
//! and CRC match its header must come out, for any known country.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use votebin::binary::{body_crc32, read_u32_be};
use votebin::config::{GeneratorConfig, PruneStrategy};
use votebin::reference::COUNTRIES;
use votebin::source::{PollKind, VoteKind};
use votebin::tables::{assemble, ClosedPoll, TargetContext, TargetData};
use votebin::testing::{question, sample_now, vote};

#[derive(Debug, Arbitrary)]
struct Row {
    prediction: bool,
    country: u8,
    region: u16,
    tally: String,
}

#[derive(Debug, Arbitrary)]
struct Input {
    country_index: u8,
    trailing_only: bool,
    national_texts: Vec<String>,
    worldwide_text: Option<String>,
    national_polls: Vec<Vec<Row>>,
    worldwide_poll: Option<Vec<Row>>,
}

fn poll(id: u32, rows: Vec<Row>) -> ClosedPoll {
    ClosedPoll {
        id,
        votes: rows
            .into_iter()
            .map(|r| {
                let kind = if r.prediction { VoteKind::Prediction } else { VoteKind::Vote };
                vote(id, kind, r.country, r.region, &r.tally)
            })
            .collect(),
    }
}

fuzz_target!(|input: Input| {
    let country = COUNTRIES[usize::from(input.country_index) % COUNTRIES.len()].code;
    let config = GeneratorConfig {
        prune: if input.trailing_only {
            PruneStrategy::TrailingOnly
        } else {
            PruneStrategy::AllEmpty
        },
        ..Default::default()
    };
    let ctx = TargetContext::new(country, sample_now(), &config).unwrap();

    let data = TargetData {
        national_questions: input
            .national_texts
            .iter()
            .take(3)
            .enumerate()
            .map(|(i, t)| question(i as u32, t))
            .collect(),
        worldwide_questions: input
            .worldwide_text
            .iter()
            .map(|t| {
                let mut q = question(99, t);
                q.kind = PollKind::Worldwide;
                q
            })
            .collect(),
        national_results: input
            .national_polls
            .into_iter()
            .take(6)
            .enumerate()
            .map(|(i, rows)| poll(100 + i as u32, rows))
            .collect(),
        worldwide_result: input.worldwide_poll.map(|rows| poll(200, rows)),
    };

    let finalized = assemble(&ctx, &data).expect("bounded input always assembles");
    let bytes = &finalized.bytes;
    assert_eq!(read_u32_be(bytes, 4), Some(bytes.len() as u32));
    assert_eq!(read_u32_be(bytes, 8), Some(body_crc32(bytes)));
});
