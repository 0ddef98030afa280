//! Tally formatting and per-region/per-country accumulation.

use votebin::config::PruneStrategy;
use votebin::format_tally;
use votebin::reference::{country, COUNTRIES};
use votebin::source::VoteKind;
use votebin::tables::{tally_national, tally_worldwide, ClosedPoll, COUNTRY_TABLE_STRIDE};

use crate::common::vote;

// ============================================================================
// FORMATTER
// ============================================================================

#[test]
fn test_four_digits_fill_every_slot() {
    assert_eq!(format_tally("1203"), [1, 2, 0, 3]);
}

#[test]
fn test_short_input_is_right_aligned() {
    assert_eq!(format_tally("7"), [0, 0, 0, 7]);
    assert_eq!(format_tally("45"), [0, 0, 4, 5]);
    assert_eq!(format_tally(""), [0, 0, 0, 0]);
}

#[test]
fn test_long_input_keeps_last_four_digits() {
    assert_eq!(format_tally("123456"), [3, 4, 5, 6]);
}

#[test]
fn test_non_digits_count_as_zero() {
    assert_eq!(format_tally("1x3"), [0, 1, 0, 3]);
    assert_eq!(format_tally("abcd"), [0, 0, 0, 0]);
}

// ============================================================================
// NATIONAL
// ============================================================================

#[test]
fn test_country_without_map_hides_detail_and_zeroes_pointers() {
    // Argentina ships without a position table
    let argentina = country(10).unwrap();
    assert!(!argentina.has_map());

    let poll = ClosedPoll {
        id: 9,
        votes: vec![
            vote(9, VoteKind::Vote, 10, 2, "1111"),
            vote(9, VoteKind::Vote, 10, 5, "2000"),
        ],
    };
    let (result, detailed) = tally_national(argentina, &poll, 0).unwrap();

    assert_eq!(result.show_detailed_results, 0);
    assert_eq!(detailed.len(), usize::from(argentina.regions));
    assert!(detailed.iter().all(|d| d.position_entry == 0 && d.position_count == 0));
    // totals and per-region tallies are still kept
    assert_eq!(result.tallies.voters(), 6);
    assert_eq!(detailed[0].response1, 2);
    assert_eq!(detailed[3].response1, 2);
}

#[test]
fn test_map_country_points_into_position_table() {
    let canada = country(18).unwrap();
    let table = canada.position_table().unwrap();
    let poll = ClosedPoll {
        id: 1,
        votes: vec![vote(1, VoteKind::Vote, 18, 2, "1")],
    };
    let (result, detailed) = tally_national(canada, &poll, 2).unwrap();

    assert_eq!(result.show_detailed_results, 1);
    assert_eq!(result.show_voter_number, 1);
    assert_eq!(result.detailed_count, 13);
    assert_eq!(result.detailed_start, 26);

    let mut sum = 0u32;
    for (i, entry) in detailed.iter().enumerate() {
        let byte = table.get(i).copied().unwrap_or(0);
        assert_eq!(entry.position_entry, sum);
        // only region 2 (slot 0) voted
        let expected = if i == 0 { byte } else { 0 };
        assert_eq!(entry.position_count, expected);
        sum += u32::from(byte);
    }
}

#[test]
fn test_predictions_fold_into_predictor_tallies() {
    let canada = country(18).unwrap();
    let poll = ClosedPoll {
        id: 1,
        votes: vec![vote(1, VoteKind::Prediction, 18, 2, "1234")],
    };
    let (result, detailed) = tally_national(canada, &poll, 0).unwrap();

    assert_eq!(result.tallies.predictors_response1, 3);
    assert_eq!(result.tallies.predictors_response2, 7);
    assert_eq!(result.tallies.voters(), 0);
    assert!(detailed.iter().all(|d| d.response1 == 0 && d.response2 == 0));
}

// ============================================================================
// WORLDWIDE
// ============================================================================

#[test]
fn test_first_and_last_country_survive_with_original_pointers() {
    let first = COUNTRIES[0].code;
    let last = COUNTRIES[COUNTRIES.len() - 1].code;
    let poll = ClosedPoll {
        id: 2,
        votes: vec![
            vote(2, VoteKind::Vote, first, 0, "10"),
            vote(2, VoteKind::Vote, last, 0, "1"),
        ],
    };
    let (result, detailed) = tally_worldwide(&poll, PruneStrategy::AllEmpty).unwrap();

    assert_eq!(detailed.len(), 2);
    assert_eq!(result.detailed_count, 2);
    assert_eq!(detailed[0].country_table_entry, 0);
    assert_eq!(
        detailed[1].country_table_entry as usize,
        (COUNTRIES.len() - 1) * COUNTRY_TABLE_STRIDE
    );
    assert_eq!(detailed[0].female_response2, 0);
    assert_eq!(detailed[0].male_response2, 1);
}

#[test]
fn test_trailing_only_keeps_inner_placeholders() {
    let poll = ClosedPoll {
        id: 2,
        votes: vec![
            vote(2, VoteKind::Vote, COUNTRIES[0].code, 0, "1"),
            vote(2, VoteKind::Vote, COUNTRIES[3].code, 0, "1"),
        ],
    };
    let (_, detailed) = tally_worldwide(&poll, PruneStrategy::TrailingOnly).unwrap();

    assert_eq!(detailed.len(), 4);
    assert!(!detailed[1].has_votes());
    assert_eq!(detailed[1].country_table_entry, 0);
    assert_eq!(detailed[3].country_table_entry as usize, 3 * COUNTRY_TABLE_STRIDE);
}

#[test]
fn test_unknown_country_counts_in_totals_only() {
    let poll = ClosedPoll {
        id: 2,
        votes: vec![vote(2, VoteKind::Vote, 3, 0, "1111")],
    };
    let (result, detailed) = tally_worldwide(&poll, PruneStrategy::AllEmpty).unwrap();
    assert_eq!(result.tallies.voters(), 4);
    assert!(detailed.is_empty());
}
