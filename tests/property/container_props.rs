//! Whole-container properties.
//!
//! - filesize and CRC32 always describe the finished bytes
//! - every string is followed by exactly one terminator, then the next string
//! - the detailed national table always holds `regions` entries per poll

use proptest::prelude::*;
use votebin::binary::{body_crc32, read_u32_be};
use votebin::reference::COUNTRIES;
use votebin::source::{LocalizedText, PollKind, Question, VoteKind, VoteRecord};
use votebin::tables::{ClosedPoll, TargetData};

use crate::common::{assemble_for, question, read_text, text_info_table, vote};

// ============================================================================
// STRATEGIES
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z ?]{1,60}",
        prop::sample::select(vec![
            "Café ?".to_string(),
            "日本語のテキスト".to_string(),
            "Größer oder kleiner?".to_string(),
            "🗳 vote".to_string(),
        ]),
    ]
}

fn question_strategy(kind: PollKind) -> impl Strategy<Value = Question> {
    (1u32..10_000, text_strategy(), text_strategy(), text_strategy()).prop_map(
        move |(id, text, r1, r2)| {
            let mut q = question(id, &text);
            q.kind = kind;
            q.response1 = LocalizedText::default().map(|_| r1.clone());
            q.response2 = LocalizedText::default().map(|_| r2.clone());
            q
        },
    )
}

fn vote_strategy(question_id: u32) -> impl Strategy<Value = VoteRecord> {
    (
        prop_oneof![3 => Just(VoteKind::Vote), 1 => Just(VoteKind::Prediction)],
        prop::sample::select(COUNTRIES.iter().map(|c| c.code).collect::<Vec<_>>()),
        0u16..60,
        "[0-9]{0,6}",
    )
        .prop_map(move |(kind, country, region, tally)| vote(question_id, kind, country, region, &tally))
}

fn data_strategy() -> impl Strategy<Value = TargetData> {
    (
        prop::collection::vec(question_strategy(PollKind::National), 0..=3),
        prop::collection::vec(question_strategy(PollKind::Worldwide), 0..=1),
        prop::collection::vec(prop::collection::vec(vote_strategy(1), 0..20), 0..=6),
        prop::option::of(prop::collection::vec(vote_strategy(2), 0..40)),
    )
        .prop_map(|(national_questions, worldwide_questions, national, worldwide)| TargetData {
            national_questions,
            worldwide_questions,
            national_results: national
                .into_iter()
                .enumerate()
                .map(|(i, votes)| ClosedPoll {
                    id: 100 + i as u32,
                    votes,
                })
                .collect(),
            worldwide_result: worldwide.map(|votes| ClosedPoll { id: 2, votes }),
        })
}

fn country_strategy() -> impl Strategy<Value = u8> {
    prop::sample::select(COUNTRIES.iter().map(|c| c.code).collect::<Vec<_>>())
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_filesize_and_crc_match(country in country_strategy(), data in data_strategy()) {
        let f = assemble_for(country, &data);
        prop_assert_eq!(read_u32_be(&f.bytes, 4), Some(f.bytes.len() as u32));
        prop_assert_eq!(read_u32_be(&f.bytes, 8), Some(body_crc32(&f.bytes)));
        prop_assert_eq!(f.header.filesize as usize, f.bytes.len());
    }

    #[test]
    fn prop_strings_are_terminated_back_to_back(country in country_strategy(), data in data_strategy()) {
        let f = assemble_for(country, &data);
        let infos = text_info_table(&f);

        let mut expected = infos.first().map(|i| i.question_offset as usize);
        for info in &infos {
            for offset in [info.question_offset, info.response1_offset, info.response2_offset] {
                let offset = offset as usize;
                prop_assert_eq!(Some(offset), expected);
                let (_, end) = read_text(&f.bytes, offset);
                prop_assert_eq!(u16::from_be_bytes([f.bytes[end - 2], f.bytes[end - 1]]), 0);
                expected = Some(end);
            }
        }
        if let Some(end) = expected {
            prop_assert_eq!(end, f.header.national_results.offset as usize);
        }
    }

    #[test]
    fn prop_detailed_national_sized_by_regions(country in country_strategy(), data in data_strategy()) {
        let f = assemble_for(country, &data);
        let regions = COUNTRIES.iter().find(|c| c.code == country).unwrap().regions;
        prop_assert_eq!(
            usize::from(f.header.detailed_national_results.count),
            usize::from(regions) * data.national_results.len()
        );
    }

    #[test]
    fn prop_question_count_matches_text_entries(country in country_strategy(), data in data_strategy()) {
        let f = assemble_for(country, &data);
        let languages = COUNTRIES.iter().find(|c| c.code == country).unwrap().languages.len();
        let questions = data.national_questions.len() + data.worldwide_questions.len();
        prop_assert_eq!(usize::from(f.header.question_text_info.count), questions * languages);
    }
}
