//! Detailed worldwide pruning properties.

use proptest::prelude::*;
use votebin::binary::DetailedWorldwideResult;
use votebin::config::PruneStrategy;
use votebin::reference::COUNTRIES;
use votebin::source::VoteKind;
use votebin::tables::{prune_detailed, tally_worldwide, ClosedPoll, COUNTRY_TABLE_STRIDE};

use crate::common::vote;

fn strategy() -> impl Strategy<Value = PruneStrategy> {
    prop_oneof![Just(PruneStrategy::AllEmpty), Just(PruneStrategy::TrailingOnly)]
}

fn entries() -> impl Strategy<Value = Vec<DetailedWorldwideResult>> {
    prop::collection::vec(any::<bool>(), 0..40).prop_map(|votes| {
        votes
            .into_iter()
            .enumerate()
            .map(|(i, voted)| DetailedWorldwideResult {
                male_response1: u32::from(voted),
                country_table_count: if voted { COUNTRY_TABLE_STRIDE as u16 } else { 0 },
                country_table_entry: if voted { (i * COUNTRY_TABLE_STRIDE) as u32 } else { 0 },
                ..Default::default()
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Pruning an already-pruned array changes nothing.
    #[test]
    fn prop_pruning_is_idempotent(mut list in entries(), strategy in strategy()) {
        prune_detailed(&mut list, strategy);
        let once = list.clone();
        prune_detailed(&mut list, strategy);
        prop_assert_eq!(list, once);
    }

    /// Nothing without votes is left at the tail.
    #[test]
    fn prop_no_trailing_empty_entry(mut list in entries(), strategy in strategy()) {
        prune_detailed(&mut list, strategy);
        prop_assert!(list.last().map_or(true, |e| e.has_votes()));
    }

    /// Survivors keep the pointer they had before pruning, in order.
    #[test]
    fn prop_pointers_survive_pruning(list in entries()) {
        let voted: Vec<u32> = list
            .iter()
            .filter(|e| e.has_votes())
            .map(|e| e.country_table_entry)
            .collect();
        let mut pruned = list.clone();
        prune_detailed(&mut pruned, PruneStrategy::AllEmpty);
        let kept: Vec<u32> = pruned.iter().map(|e| e.country_table_entry).collect();
        prop_assert_eq!(kept, voted);
    }

    /// Only the first and last countries voting leaves exactly those two.
    #[test]
    fn prop_first_and_last_survive(first in "[1-9][0-9]{0,3}", last in "[1-9][0-9]{0,3}") {
        let n = COUNTRIES.len();
        let poll = ClosedPoll {
            id: 1,
            votes: vec![
                vote(1, VoteKind::Vote, COUNTRIES[0].code, 0, &first),
                vote(1, VoteKind::Vote, COUNTRIES[n - 1].code, 0, &last),
            ],
        };
        let (result, detailed) = tally_worldwide(&poll, PruneStrategy::AllEmpty).unwrap();
        prop_assert_eq!(result.detailed_count, 2);
        prop_assert_eq!(detailed[0].country_table_entry, 0);
        prop_assert_eq!(detailed[1].country_table_entry as usize, (n - 1) * COUNTRY_TABLE_STRIDE);
    }
}
