// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy word wrapping for on-screen question text.
//!
//! The reader renders text as-is, with no wrapping of its own, so long lines
//! run off the screen. Text gets explicit line breaks once, when it enters
//! the pipeline. Existing breaks are kept, lines break at spaces, and a single
//! word longer than the width stays whole on its own line.
//!
//! Widths count Unicode scalar values, not bytes.

/// Wrap `text` so no line exceeds `width` characters where a space allows it.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / width.max(1));

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        wrap_line(line, width, &mut out);
    }

    out
}

fn wrap_line(line: &str, width: usize, out: &mut String) {
    let mut current = 0usize;

    for (i, word) in line.split(' ').enumerate() {
        let len = word.chars().count();
        if i == 0 {
            out.push_str(word);
            current = len;
        } else if current + 1 + len > width && current > 0 {
            out.push('\n');
            out.push_str(word);
            current = len;
        } else {
            out.push(' ');
            out.push_str(word);
            current += 1 + len;
        }
    }
}
