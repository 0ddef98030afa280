// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output file naming and the final write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::config::{FileType, Locality};
use crate::error::{Error, Result};

/// Name of the combined questions-and-results file.
pub const NORMAL_FILE_NAME: &str = "voting.bin";

/// Name of the country/language directory file.
pub const FIRST_DATA_FILE_NAME: &str = "first.bin";

/// Days a dated file's stamp trails the run date.
fn stamp_lag(locality: Locality) -> i64 {
    match locality {
        Locality::National => 7,
        Locality::Worldwide | Locality::All => 14,
    }
}

/// `<out>/<ccc>/voting.bin`, or `<out>/<ccc>/<YYYY>/<MMDD>_{r,q}.bin` for
/// results-only and questions-only files.
pub fn target_path(
    output_dir: &Path,
    country: u8,
    file_type: FileType,
    locality: Locality,
    now: DateTime<Utc>,
) -> PathBuf {
    let country_dir = output_dir.join(format!("{:03}", country));
    let suffix = match file_type {
        FileType::Normal => return country_dir.join(NORMAL_FILE_NAME),
        FileType::Results => "r",
        FileType::Questions => "q",
    };

    let stamp = now - Duration::days(stamp_lag(locality));
    country_dir
        .join(format!("{:04}", stamp.year()))
        .join(format!("{:02}{:02}_{}.bin", stamp.month(), stamp.day(), suffix))
}

/// Sibling path a file is staged at before it replaces `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a finished file, creating parent directories as needed.
///
/// The bytes land in a sibling `.tmp` file first and are renamed into place,
/// so a failed write never replaces the previous file with a partial one.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let tmp_path = staging_path(path);
    let staged = fs::File::create(&tmp_path).and_then(|mut f| {
        f.write_all(bytes)?;
        f.sync_all()
    });
    if let Err(e) = staged {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::io(&tmp_path, e));
    }

    #[cfg(windows)]
    {
        if path.exists() {
            // Windows rename fails if destination exists.
            fs::remove_file(path).map_err(|e| Error::io(path, e))?;
        }
    }

    fs::rename(&tmp_path, path).map_err(|e| Error::io(path, e))
}
