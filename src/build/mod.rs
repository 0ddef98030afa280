// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run orchestration: one sealed file per country, written only once it is
//! complete.
//!
//! Each target gets its own context, container and source session. A data
//! error only costs that target its file; a layout or key error means the
//! generator itself is wrong and stops the run.

pub mod output;
pub mod parallel;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::first_data::build_first_data;
use crate::reference::{country_codes, require_country};
use crate::signing::Signer;
use crate::source::DataSource;
use crate::tables::{generate, TargetContext};

pub use output::{target_path, write_output, FIRST_DATA_FILE_NAME, NORMAL_FILE_NAME};

/// Everything a run needs besides the data source and the key.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub output_dir: PathBuf,
    /// Country codes to build; empty means every known country.
    pub countries: Vec<u8>,
    pub now: DateTime<Utc>,
    pub config: GeneratorConfig,
    /// Worker threads; `None` lets rayon decide.
    pub jobs: Option<usize>,
}

impl BuildOptions {
    pub fn targets(&self) -> Vec<u8> {
        if self.countries.is_empty() {
            country_codes().collect()
        } else {
            self.countries.clone()
        }
    }
}

/// A file that was sealed and written.
#[derive(Debug, Clone)]
pub struct BuiltTarget {
    pub country: u8,
    pub path: PathBuf,
    /// Finalized container size, before compression.
    pub container_len: usize,
    pub written_len: usize,
    pub crc32: u32,
}

/// A failure attributed to one country.
#[derive(Debug, thiserror::Error)]
#[error("country {country:03}: {}: {source}", .source.stage())]
pub struct TargetError {
    pub country: u8,
    pub source: Error,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub built: Vec<BuiltTarget>,
    /// Targets skipped over data errors.
    pub failed: Vec<TargetError>,
}

/// Generate, seal and write one country's file.
///
/// `signer == None` writes the finalized container as is.
pub fn build_target(
    source: &dyn DataSource,
    signer: Option<&Signer>,
    options: &BuildOptions,
    country: u8,
) -> Result<BuiltTarget> {
    let ctx = TargetContext::new(country, options.now, &options.config)?;
    let finalized = generate(source, &ctx)?;
    let container_len = finalized.bytes.len();
    let crc32 = finalized.header.crc32;

    let bytes = match signer {
        Some(signer) => signer.seal(&finalized.bytes)?,
        None => finalized.bytes,
    };

    let path = target_path(
        &options.output_dir,
        country,
        options.config.file_type,
        options.config.locality,
        options.now,
    );
    write_output(&path, &bytes)?;

    info!(country, path = %path.display(), bytes = bytes.len(), "wrote target");
    Ok(BuiltTarget {
        country,
        path,
        container_len,
        written_len: bytes.len(),
        crc32,
    })
}

/// A target that was either built or skipped.
pub type Outcome = Result<BuiltTarget, TargetError>;

/// Sort a target's result into built, skipped, or run-ending.
fn settle(country: u8, result: Result<BuiltTarget>) -> Result<Outcome, TargetError> {
    match result {
        Ok(built) => Ok(Ok(built)),
        Err(source) if source.is_fatal_for_run() => Err(TargetError { country, source }),
        Err(source) => {
            warn!(country, stage = source.stage(), error = %source, "target skipped");
            Ok(Err(TargetError { country, source }))
        }
    }
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Build every requested country.
pub fn run_build(
    source: &dyn DataSource,
    signer: Option<&Signer>,
    options: &BuildOptions,
) -> Result<BuildReport, TargetError> {
    let targets = options.targets();
    for &country in &targets {
        require_country(country).map_err(|source| TargetError { country, source })?;
    }

    #[cfg(feature = "parallel")]
    let progress = {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Generating");
        pb.set_message("countries...");
        pb
    };

    let outcomes = parallel::build_targets(
        source,
        signer,
        options,
        &targets,
        #[cfg(feature = "parallel")]
        &progress,
    )?;

    #[cfg(feature = "parallel")]
    progress.finish_with_message("done");

    let mut report = BuildReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(built) => report.built.push(built),
            Err(failed) => report.failed.push(failed),
        }
    }
    report.built.sort_by_key(|b| b.country);

    let total_bytes: usize = report.built.iter().map(|b| b.written_len).sum();
    eprintln!();
    if report.failed.is_empty() {
        eprintln!("✅ Generation complete");
    } else {
        eprintln!("⚠️  Generation finished with {} skipped countries", report.failed.len());
    }
    eprintln!(
        "   {} files │ {} signed │ {}",
        report.built.len(),
        if signer.is_some() { "all" } else { "none" },
        format_bytes(total_bytes)
    );

    Ok(report)
}

/// Build, seal and write the first-data file.
pub fn run_first_data(signer: Option<&Signer>, path: &Path) -> Result<usize> {
    let container = build_first_data()?;
    let bytes = match signer {
        Some(signer) => signer.seal(&container)?,
        None => container,
    };
    write_output(path, &bytes)?;
    eprintln!("  ✓ {}", path.display());
    Ok(bytes.len())
}

pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
