// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Question tables: national and worldwide question info, the per-language
//! text info table, and the UTF-16 question text blob.
//!
//! Every question gets one text-info entry per language its target country
//! reads, and `text_entry` is the index of the first of them. The counter
//! runs across both question tables, so a worldwide question's entries
//! follow the national ones. Text offsets are unknown until the blob is
//! written, so the text-info entries go out with zeroed offsets and are
//! patched in place as each string is appended.

use crate::binary::{timestamp, Container, QuestionInfo, QuestionTextInfo, Section};
use crate::error::{Error, Result};
use crate::source::Question;

use super::TargetContext;

fn question_info(ctx: &TargetContext<'_>, q: &Question, text_entry: u32) -> Result<QuestionInfo> {
    let language_count = u8::try_from(ctx.country.languages.len())
        .map_err(|_| Error::invariant("country language count overflows u8"))?;
    Ok(QuestionInfo {
        poll_id: q.id,
        category1: q.category,
        category2: q.category2,
        start: timestamp(q.start()),
        end: timestamp(q.end()),
        language_count,
        text_entry,
    })
}

pub fn build(
    c: &mut Container,
    ctx: &TargetContext<'_>,
    national: &[Question],
    worldwide: &[Question],
) -> Result<()> {
    let languages = ctx.country.languages;
    let per_question = languages.len() as u32;
    let mut entry = 0u32;

    c.begin(Section::NationalQuestions)?;
    for q in national {
        c.push_national_question(question_info(ctx, q, entry)?)?;
        entry += per_question;
    }

    c.begin(Section::WorldwideQuestions)?;
    for q in worldwide {
        c.push_worldwide_question(question_info(ctx, q, entry)?)?;
        entry += per_question;
    }

    c.begin(Section::QuestionTextInfo)?;
    for _ in national.iter().chain(worldwide) {
        for lang in languages {
            c.push_question_text_info(QuestionTextInfo {
                language: lang.code(),
                ..Default::default()
            })?;
        }
    }

    c.begin(Section::QuestionText)?;
    let mut index = 0;
    for q in national.iter().chain(worldwide) {
        for &lang in languages {
            let question_offset = c.push_question_text(q.text.get(lang))?;
            let response1_offset = c.push_question_text(q.response1.get(lang))?;
            let response2_offset = c.push_question_text(q.response2.get(lang))?;

            let info = c.question_text_info_mut(index)?;
            info.question_offset = question_offset;
            info.response1_offset = response1_offset;
            info.response2_offset = response2_offset;
            index += 1;
        }
    }

    Ok(())
}
