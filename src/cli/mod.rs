// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the votebin command-line interface.
//!
//! Three subcommands: `generate` to build one sealed file per country,
//! `first-data` to build the country/language directory file, and
//! `countries` to list the reference table the generator ships with.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "votebin",
    about = "Signed binary vote files for the poll channel",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate vote files from a dataset
    Generate {
        /// Dataset JSON with questions and votes
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory; files land under <output>/<ccc>/
        #[arg(short, long)]
        output: PathBuf,

        /// RSA private key (PKCS#1 or PKCS#8 PEM)
        #[arg(short, long, required_unless_present = "unsigned")]
        key: Option<PathBuf>,

        /// File type: v (questions and results), r (results), q (questions)
        #[arg(short = 't', long)]
        file_type: Option<String>,

        /// Locality: n (national), w (worldwide), anything else both
        #[arg(short, long)]
        locality: Option<String>,

        /// Country code to build; repeat for several, omit for all
        #[arg(short, long = "country")]
        countries: Vec<u8>,

        /// Run date (RFC 3339); defaults to now
        #[arg(short, long)]
        date: Option<String>,

        /// JSON file with generator defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Worker threads (default: one per core)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Write finalized containers without compressing or signing
        #[arg(long)]
        unsigned: bool,
    },

    /// Generate the country and language directory file
    FirstData {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// RSA private key (PKCS#1 or PKCS#8 PEM)
        #[arg(short, long, required_unless_present = "unsigned")]
        key: Option<PathBuf>,

        /// Write the container without compressing or signing
        #[arg(long)]
        unsigned: bool,
    },

    /// List known countries, their regions and languages
    Countries,
}
