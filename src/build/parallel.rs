// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-country fan-out.
//!
//! Countries are embarrassingly parallel: every target opens its own source
//! session and owns its own container, and the only shared state is the
//! signer and the reference tables, both read-only. Rayon's `par_iter()`
//! does the rest. A run-ending error short-circuits the collect; the other
//! workers finish whatever target they are on.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::signing::Signer;
use crate::source::DataSource;

use super::{build_target, settle, BuildOptions, Outcome, TargetError};

/// Build `targets` across a rayon pool, sized by `options.jobs` if set.
#[cfg(feature = "parallel")]
pub fn build_targets(
    source: &dyn DataSource,
    signer: Option<&Signer>,
    options: &BuildOptions,
    targets: &[u8],
    progress: &ProgressBar,
) -> Result<Vec<Outcome>, TargetError> {
    let counter = AtomicUsize::new(0);
    let total = targets.len();

    let run = || {
        targets
            .par_iter()
            .map(|&country| {
                let outcome = settle(country, build_target(source, signer, options, country));

                let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
                progress.set_position(count as u64);
                progress.set_message(format!("{:03} ({}/{})", country, count, total));

                outcome
            })
            .collect::<Result<Vec<Outcome>, TargetError>>()
    };

    match options.jobs {
        Some(jobs) => match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                tracing::warn!(jobs, error = %e, "could not size worker pool; using the global one");
                run()
            }
        },
        None => run(),
    }
}

/// Sequential fallback without the `parallel` feature.
#[cfg(not(feature = "parallel"))]
pub fn build_targets(
    source: &dyn DataSource,
    signer: Option<&Signer>,
    options: &BuildOptions,
    targets: &[u8],
) -> Result<Vec<Outcome>, TargetError> {
    targets
        .iter()
        .map(|&country| settle(country, build_target(source, signer, options, country)))
        .collect()
}
