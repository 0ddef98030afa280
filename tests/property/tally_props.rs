//! Tally formatter and accumulation properties.

use proptest::prelude::*;
use votebin::format_tally;
use votebin::reference::country;
use votebin::source::VoteKind;
use votebin::tables::{tally_national, ClosedPoll};

use crate::common::vote;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Summing the slots gives the digit sum of the last four digits.
    #[test]
    fn prop_slots_resum_to_digit_total(digits in "[0-9]{0,12}") {
        let tail: u32 = digits
            .chars()
            .rev()
            .take(4)
            .map(|c| c.to_digit(10).unwrap())
            .sum();
        prop_assert_eq!(format_tally(&digits).iter().sum::<u32>(), tail);
    }

    /// Slots read the string right-aligned.
    #[test]
    fn prop_slots_are_right_aligned(digits in "[0-9]{1,4}") {
        let slots = format_tally(&digits);
        let pad = 4 - digits.len();
        prop_assert!(slots[..pad].iter().all(|&s| s == 0));
        for (slot, c) in slots[pad..].iter().zip(digits.chars()) {
            prop_assert_eq!(*slot, c.to_digit(10).unwrap());
        }
    }

    /// Any string at all formats without panicking, each slot a single digit.
    #[test]
    fn prop_never_panics(s in ".{0,16}") {
        prop_assert!(format_tally(&s).iter().all(|&slot| slot <= 9));
    }

    /// Region detail plus out-of-range votes add up to the national totals.
    #[test]
    fn prop_region_detail_never_exceeds_totals(
        rows in prop::collection::vec((0u16..20, "[0-9]{4}"), 0..30)
    ) {
        let canada = country(18).unwrap();
        let poll = ClosedPoll {
            id: 1,
            votes: rows
                .iter()
                .map(|(region, tally)| vote(1, VoteKind::Vote, 18, *region, tally))
                .collect(),
        };
        let (result, detailed) = tally_national(canada, &poll, 0).unwrap();

        let in_range: u32 = rows
            .iter()
            .filter(|(region, _)| (2..15).contains(region))
            .map(|(_, tally)| format_tally(tally).iter().sum::<u32>())
            .sum();
        let detail: u32 = detailed.iter().map(|d| d.response1 + d.response2).sum();

        prop_assert_eq!(detailed.len(), 13);
        prop_assert_eq!(detail, in_range);
        prop_assert!(detail <= result.tallies.voters());
    }
}
