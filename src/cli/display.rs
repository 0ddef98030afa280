// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the votebin CLI.
//!
//! OneDark for dark terminals, One Light for light ones. `VOTEBIN_THEME`
//! picks one explicitly, otherwise `COLORFGBG` is consulted, otherwise dark.
//! Respects `NO_COLOR` and falls back to plain text when stdout is not a TTY.

use std::sync::OnceLock;

use crate::build::{format_bytes, BuildReport};
use crate::reference::{ConsoleRegion, CountryInfo, COUNTRIES};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("VOTEBIN_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where a bright background means a light theme
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or return plain text.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as displayed, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Strip colors when they are off.
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let (b, r) = (border(), reset());
    println!("{b}│{r}{}{}{b}│{r}", content, " ".repeat(pad));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let (b, r) = (border(), reset());
    println!("{b}┌{r}{}{b}{}┐{r}", label_part, "─".repeat(remaining));
}

/// └──────────────────┘
pub fn section_bot() {
    let (b, r) = (border(), reset());
    println!("{b}└{}┘{r}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn region_label(region: ConsoleRegion) -> String {
    match region {
        ConsoleRegion::Japan => themed(RED, &[], "JPN"),
        ConsoleRegion::Ntsc => themed(BLUE, &[], "NTSC"),
        ConsoleRegion::Pal => themed(MAGENTA, &[], "PAL"),
    }
}

pub fn map_label(country: &CountryInfo) -> String {
    if country.has_map() {
        themed(GREEN, &[], "map")
    } else {
        themed(GRAY, &[DIM], "-")
    }
}

/// Size change from container to written file, as a signed percentage.
pub fn ratio_colored(container: usize, written: usize) -> String {
    if container == 0 {
        return themed(GRAY, &[], "   N/A");
    }
    let change = (written as f64 / container as f64 - 1.0) * 100.0;
    if change.abs() < 0.5 {
        themed(GRAY, &[], "    0%")
    } else if change < 0.0 {
        themed(GREEN, &[BOLD], &format!("{:>+5.0}%", change))
    } else {
        themed(YELLOW, &[], &format!("{:>+5.0}%", change))
    }
}

pub fn country_row(country: &CountryInfo) -> String {
    let languages = country
        .languages
        .iter()
        .map(|l| format!("{:?}", l))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        " {} {} {} {} {} {}",
        themed(CYAN, &[BOLD], &format!("{:03}", country.code)),
        pad_right(country.names[1], 20),
        pad_left(&country.regions.to_string(), 3),
        pad_right(&region_label(country.console_region), 5),
        pad_right(&map_label(country), 4),
        languages
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_countries() {
    section_top(&format!("COUNTRIES ({})", COUNTRIES.len()));
    row(&themed(GRAY, &[DIM], " code name                 reg region map  languages"));
    for country in COUNTRIES {
        row(&country_row(country));
    }
    section_bot();
}

pub fn print_report(report: &BuildReport) {
    if !report.built.is_empty() {
        section_top("FILES");
        for built in &report.built {
            row(&format!(
                " {} {} {} {} {}",
                themed(CYAN, &[BOLD], &format!("{:03}", built.country)),
                pad_left(&format_bytes(built.container_len), 9),
                pad_left(&format_bytes(built.written_len), 9),
                ratio_colored(built.container_len, built.written_len),
                themed(GRAY, &[], &format!("crc {:08x}", built.crc32)),
            ));
        }
        section_bot();
    }

    if !report.failed.is_empty() {
        section_top("SKIPPED");
        for failed in &report.failed {
            row(&format!(" {}", themed(RED, &[], &failed.to_string())));
        }
        section_bot();
    }
}
