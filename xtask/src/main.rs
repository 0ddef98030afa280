//! Custom cargo commands for the votebin crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask test      - Run all tests, with and without `parallel`
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["tally_format", "container_layout", "lz11_codec"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(env::args().nth(2).as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + smoke run)
  test      Run all Rust tests, with and without the parallel feature
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for 60s, or one: cargo xtask fuzz <target>
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("votebin Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking license headers...");
    check_license_headers()?;
    println!("✓ License headers present\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Generating from the sample dataset...");
    smoke_run()?;
    println!("✓ Every country written\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run fuzz targets (requires cargo-fuzz and a nightly toolchain)
fn fuzz(target: Option<&str>) -> Result<()> {
    let targets: Vec<&str> = match target {
        Some(t) if FUZZ_TARGETS.contains(&t) => vec![t],
        Some(t) => bail!("unknown fuzz target '{}', expected one of {:?}", t, FUZZ_TARGETS),
        None => FUZZ_TARGETS.to_vec(),
    };

    let root = project_root()?;
    for target in targets {
        println!("Fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
            .current_dir(&root)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no working directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Source files other than the crate roots must carry the SPDX header.
fn check_license_headers() -> Result<()> {
    let root = project_root()?;
    let mut missing = Vec::new();
    collect_missing_headers(&root.join("src"), &mut missing)?;

    if !missing.is_empty() {
        bail!("missing license header:\n  {}", missing.join("\n  "));
    }
    Ok(())
}

fn collect_missing_headers(dir: &Path, missing: &mut Vec<String>) -> Result<()> {
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_missing_headers(&path, missing)?;
            continue;
        }
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if !name.ends_with(".rs") || ["lib.rs", "main.rs", "testing.rs"].contains(&name) {
            continue;
        }
        let content = std::fs::read_to_string(&path)?;
        if !content.contains("SPDX-License-Identifier: Apache-2.0") {
            missing.push(path.display().to_string());
        }
    }
    Ok(())
}

/// Generate unsigned files for every country from the fixture dataset.
fn smoke_run() -> Result<()> {
    let root = project_root()?;
    let out = root.join("target/xtask-smoke");
    if out.exists() {
        std::fs::remove_dir_all(&out).context("clearing previous smoke output")?;
    }

    let out_arg = out.to_string_lossy().to_string();
    run_cargo(&[
        "run",
        "--quiet",
        "--",
        "generate",
        "--input",
        "data/fixtures/dataset.json",
        "--output",
        &out_arg,
        "--date",
        "2025-02-01T00:00:00Z",
        "--unsigned",
    ])?;

    let written = std::fs::read_dir(&out)?.count();
    if written == 0 {
        bail!("smoke run wrote nothing to {}", out.display());
    }
    println!("  {} country directories", written);
    Ok(())
}
