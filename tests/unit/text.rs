//! Question and country text inside finished containers.

use votebin::binary::{encode_text, read_u32_be, CountryInfoEntry, WireRecord};
use votebin::config::GeneratorConfig;
use votebin::reference::{COUNTRIES, UI_LANGUAGES};
use votebin::source::LocalizedText;
use votebin::tables::{generate, TargetContext, TargetData};
use votebin::Finalized;

use crate::common::{
    assemble_for, question, read_text, sample_dataset, sample_now, text_info_table,
};

fn canada() -> Finalized {
    let config = GeneratorConfig::default();
    let ctx = TargetContext::new(18, sample_now(), &config).unwrap();
    generate(&sample_dataset(), &ctx).unwrap()
}

#[test]
fn test_encoder_appends_one_terminator() {
    assert_eq!(encode_text(""), vec![0]);
    assert_eq!(encode_text("Oui"), vec![0x4F, 0x75, 0x69, 0]);
    // astral characters take a surrogate pair
    assert_eq!(encode_text("🗳").len(), 3);
}

#[test]
fn test_each_string_ends_where_the_next_begins() {
    let f = canada();
    let infos = text_info_table(&f);

    for pair in infos.windows(2) {
        let (_, end) = read_text(&f.bytes, pair[0].question_offset as usize);
        assert_eq!(end, pair[0].response1_offset as usize);
        let (_, end) = read_text(&f.bytes, pair[0].response1_offset as usize);
        assert_eq!(end, pair[0].response2_offset as usize);
        let (_, end) = read_text(&f.bytes, pair[0].response2_offset as usize);
        assert_eq!(end, pair[1].question_offset as usize);
    }

    // the last response runs up to the results tables
    let last = infos.last().unwrap();
    let (_, end) = read_text(&f.bytes, last.response2_offset as usize);
    assert_eq!(end, f.header.national_results.offset as usize);
}

#[test]
fn test_question_text_is_localized_and_wrapped() {
    let f = canada();
    let infos = text_info_table(&f);

    // 104 is the second live national question; Spanish is Canada's second language
    let (english, _) = read_text(&f.bytes, infos[3].question_offset as usize);
    assert!(english.contains('\n'));
    assert!(english.lines().all(|line| line.chars().count() <= 50));

    let (spanish, _) = read_text(&f.bytes, infos[4].response1_offset as usize);
    assert_eq!(spanish, "Fondo del mar");
}

#[test]
fn test_empty_string_still_takes_a_terminator() {
    let mut q = question(7, "Left or right?");
    q.response1 = LocalizedText::default();
    let data = TargetData {
        national_questions: vec![q],
        ..Default::default()
    };
    let f = assemble_for(18, &data);

    for info in text_info_table(&f) {
        let (empty, end) = read_text(&f.bytes, info.response1_offset as usize);
        assert!(empty.is_empty());
        assert_eq!(end, info.response1_offset as usize + 2);
        assert_eq!(end, info.response2_offset as usize);
    }
}

#[test]
fn test_country_names_in_ui_language_order() {
    let f = canada();
    let table = f.header.country_info.offset as usize;

    for (ci, country) in COUNTRIES.iter().enumerate() {
        for (li, lang) in UI_LANGUAGES.iter().enumerate() {
            let at = table + (ci * UI_LANGUAGES.len() + li) * CountryInfoEntry::SIZE;
            assert_eq!(f.bytes[at], lang.code());
            let offset = read_u32_be(&f.bytes, at + 1).unwrap() as usize;
            let (name, _) = read_text(&f.bytes, offset);
            assert_eq!(name, country.names[li]);
        }
    }
}
