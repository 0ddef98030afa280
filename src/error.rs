// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for container generation.
//!
//! Every failure is terminal for the target being generated. There is no
//! retry or partial output anywhere in the pipeline: a container is either
//! finalized, compressed and signed in memory, or nothing is written.
//!
//! The variants group into three families:
//!
//! - **Upstream data** (`Data`, `Config`): the source handed us something we
//!   can't lay out. Aborts the current country.
//! - **Layout invariants** (`Invariant`, `UnknownCountry`): a count didn't fit
//!   its field, a section was appended out of order, or the write pass
//!   disagreed with the measured size. These are logic defects.
//! - **Integrity** (`Key`, `Signing`, `Compression`): the file can't be
//!   sealed, so it must not be emitted.

use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or missing records from the data source.
    #[error("{0}")]
    Data(String),

    /// Invalid generator configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Internal layout invariant violated.
    #[error("layout invariant violated: {0}")]
    Invariant(String),

    /// A country code with no entry in the reference tables.
    #[error("country {0} has no reference data")]
    UnknownCountry(u8),

    /// Signing key missing, unreadable or malformed.
    #[error("signing key {path}: {reason}")]
    Key { path: PathBuf, reason: String },

    /// Hashing or RSA signing failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// Compressor rejected the container.
    #[error("compression failed: {0}")]
    Compression(String),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn invariant(msg: impl Into<String>) -> Self {
        Error::Invariant(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Short label for the pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Data(_) => "data",
            Error::Config(_) => "config",
            Error::Invariant(_) | Error::UnknownCountry(_) => "layout",
            Error::Key { .. } | Error::Signing(_) => "signing",
            Error::Compression(_) => "compression",
            Error::Io { .. } => "io",
        }
    }

    /// Layout defects abort the whole run, not just the current target.
    pub fn is_fatal_for_run(&self) -> bool {
        matches!(
            self,
            Error::Invariant(_) | Error::UnknownCountry(_) | Error::Key { .. } | Error::Config(_)
        )
    }
}
