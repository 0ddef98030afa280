//! Section order, offsets and gating of whole containers built from the
//! sample dataset.

use votebin::binary::{
    body_crc32, read_u32_be, CountryInfoEntry, DetailedNationalResult, DetailedWorldwideResult,
    NationalResult, QuestionInfo, QuestionTextInfo, VoteHeader, WireRecord, WorldWideResult,
};
use votebin::config::{FileType, GeneratorConfig, Locality};
use votebin::reference::{COUNTRIES, UI_LANGUAGES};
use votebin::tables::{generate, TargetContext};
use votebin::Finalized;

use crate::common::{sample_dataset, sample_now, text_info_table};

fn build(country: u8, config: GeneratorConfig) -> Finalized {
    let ctx = TargetContext::new(country, sample_now(), &config).unwrap();
    generate(&sample_dataset(), &ctx).unwrap()
}

#[test]
fn test_header_is_sealed() {
    let f = build(18, GeneratorConfig::default());
    assert_eq!(read_u32_be(&f.bytes, 0), Some(0));
    assert_eq!(read_u32_be(&f.bytes, 4), Some(f.bytes.len() as u32));
    assert_eq!(read_u32_be(&f.bytes, 8), Some(body_crc32(&f.bytes)));
    assert_eq!(f.bytes[16], 18);
}

#[test]
fn test_tables_follow_each_other_without_gaps() {
    let f = build(18, GeneratorConfig::default());
    let h = &f.header;

    assert_eq!(h.national_questions.count, 2);
    assert_eq!(h.worldwide_questions.count, 1);
    assert_eq!(h.question_text_info.count, 9);
    assert_eq!(h.national_results.count, 2);
    assert_eq!(h.detailed_national_results.count, 26);
    assert_eq!(h.worldwide_results.count, 1);

    let at = |offset: u32| offset as usize;
    assert_eq!(at(h.national_questions.offset), VoteHeader::SIZE);
    assert_eq!(
        at(h.worldwide_questions.offset),
        at(h.national_questions.offset) + 2 * QuestionInfo::SIZE
    );
    assert_eq!(
        at(h.question_text_info.offset),
        at(h.worldwide_questions.offset) + QuestionInfo::SIZE
    );
    // the text blob sits between the text info table and the results
    assert!(at(h.national_results.offset) > at(h.question_text_info.offset) + 9 * QuestionTextInfo::SIZE);
    assert_eq!(
        at(h.detailed_national_results.offset),
        at(h.national_results.offset) + 2 * NationalResult::SIZE
    );
    assert_eq!(
        at(h.position_table.offset),
        at(h.detailed_national_results.offset) + 26 * DetailedNationalResult::SIZE
    );
    assert_eq!(
        at(h.worldwide_results.offset),
        at(h.position_table.offset) + usize::from(h.position_table.count)
    );
    assert_eq!(
        at(h.detailed_worldwide_results.offset),
        at(h.worldwide_results.offset) + WorldWideResult::SIZE
    );
    assert_eq!(
        at(h.country_info.offset),
        at(h.detailed_worldwide_results.offset)
            + usize::from(h.detailed_worldwide_results.count) * DetailedWorldwideResult::SIZE
    );
    assert_eq!(usize::from(h.country_info.count), COUNTRIES.len() * UI_LANGUAGES.len());

    // the country text runs to the end of the file
    let first_name = read_u32_be(&f.bytes, at(h.country_info.offset) + 1).unwrap();
    assert_eq!(
        first_name as usize,
        at(h.country_info.offset) + usize::from(h.country_info.count) * CountryInfoEntry::SIZE
    );
}

#[test]
fn test_text_entries_continue_into_worldwide_table() {
    let f = build(18, GeneratorConfig::default());
    let ww = f.header.worldwide_questions.offset as usize;
    // language count, then text_entry at the end of the record
    assert_eq!(f.bytes[ww + 14], 3);
    assert_eq!(read_u32_be(&f.bytes, ww + 15), Some(6));
}

#[test]
fn test_text_info_languages_follow_country() {
    let f = build(18, GeneratorConfig::default());
    let languages: Vec<u8> = text_info_table(&f).iter().map(|t| t.language).collect();
    assert_eq!(languages, vec![1, 4, 8, 1, 4, 8, 1, 4, 8]);
}

#[test]
fn test_questions_only_file() {
    let f = build(
        18,
        GeneratorConfig {
            file_type: FileType::Questions,
            ..Default::default()
        },
    );
    let h = &f.header;
    assert_eq!(h.national_results.count, 0);
    assert_eq!(h.detailed_national_results.count, 0);
    assert_eq!(h.position_table.count, 0);
    assert_eq!(h.worldwide_results.count, 0);
    assert_eq!(h.detailed_worldwide_results.count, 0);
    // empty result sections all point at the country info table
    assert_eq!(h.national_results.offset, h.country_info.offset);
    assert_eq!(h.detailed_worldwide_results.offset, h.country_info.offset);
}

#[test]
fn test_worldwide_locality() {
    let f = build(
        18,
        GeneratorConfig {
            locality: Locality::Worldwide,
            ..Default::default()
        },
    );
    let h = &f.header;
    assert_eq!(h.national_questions.count, 0);
    assert_eq!(h.worldwide_questions.count, 1);
    assert_eq!(h.national_results.count, 0);
    assert_eq!(h.worldwide_results.count, 1);
    // Japan, Canada, country 77 and the UK voted; 49 only predicted
    assert_eq!(h.detailed_worldwide_results.count, 4);
}

#[test]
fn test_country_without_map_has_no_position_table() {
    let f = build(10, GeneratorConfig::default());
    assert_eq!(f.header.position_table.count, 0);
    assert_eq!(f.header.detailed_national_results.count, 2 * 24);
}
