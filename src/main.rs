use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use votebin::build::{format_bytes, run_build, run_first_data, BuildOptions};
use votebin::cli::display::{print_countries, print_report};
use votebin::cli::{Cli, Commands};
use votebin::config::{FileType, GeneratorConfig, Locality};
use votebin::signing::Signer;
use votebin::source::json::JsonDataset;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            input,
            output,
            key,
            file_type,
            locality,
            countries,
            date,
            config,
            jobs,
            unsigned,
        } => {
            let mut config = match config {
                Some(path) => GeneratorConfig::load(&path)?,
                None => GeneratorConfig::default(),
            };
            if let Some(flag) = file_type {
                config.file_type = FileType::from_str(&flag)?;
            }
            if let Some(flag) = locality {
                config.locality = Locality::from_flag(&flag);
            }
            config.validate()?;

            let now = parse_date(date.as_deref())?;
            let source = JsonDataset::load(&input, config.wrap_width)
                .with_context(|| format!("loading dataset {}", input.display()))?;
            let signer = load_signer(key.as_deref(), unsigned)?;

            let options = BuildOptions {
                output_dir: output,
                countries,
                now,
                config,
                jobs,
            };
            let report = run_build(&source, signer.as_ref(), &options)?;
            print_report(&report);

            if !report.failed.is_empty() {
                bail!("{} of {} countries skipped", report.failed.len(), options.targets().len());
            }
        }
        Commands::FirstData {
            output,
            key,
            unsigned,
        } => {
            let signer = load_signer(key.as_deref(), unsigned)?;
            let written = run_first_data(signer.as_ref(), &output)?;
            eprintln!("   {}", format_bytes(written));
        }
        Commands::Countries => print_countries(),
    }
    Ok(())
}

fn parse_date(date: Option<&str>) -> Result<DateTime<Utc>> {
    match date {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --date '{}'", s))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

fn load_signer(key: Option<&Path>, unsigned: bool) -> Result<Option<Signer>> {
    if unsigned {
        return Ok(None);
    }
    let path: PathBuf = key
        .map(Path::to_path_buf)
        .context("a signing key is required unless --unsigned is given")?;
    Ok(Some(Signer::from_pem_file(&path)?))
}
