//! Seed check command
//!
//! Usage: duv seed check <PATH>
//!
//! Loads a seed file (or every `.json` file in a directory) exactly as
//! `serve` would, and reports counts and digest without starting a server.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Validate a seed file without serving it
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to a seed JSON file or a directory of them
    pub path: PathBuf,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<()> {
    match args.command {
        SeedCommand::Check(check_args) => execute_check(check_args),
    }
}

fn execute_check(args: CheckArgs) -> Result<()> {
    if !args.path.is_dir() {
        return check_file(&args.path);
    }

    // Sorted for deterministic output
    let mut seed_files: Vec<PathBuf> = std::fs::read_dir(&args.path)
        .with_context(|| format!("cannot read directory {}", args.path.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    seed_files.sort();

    if seed_files.is_empty() {
        bail!("no .json seed files found in {}", args.path.display());
    }

    for seed_file in seed_files {
        check_file(&seed_file)?;
    }
    Ok(())
}

fn check_file(path: &Path) -> Result<()> {
    println!("Checking {}...", path.display());

    let loaded = duv_store::load_seed(Some(path))
        .with_context(|| format!("seed {} is invalid", path.display()))?;
    let (people, ships, declarations) = loaded.store.counts();

    println!(
        "✓ Valid: {} people, {} ships, {} declarations (digest: {})",
        people,
        ships,
        declarations,
        loaded.digest().unwrap_or("-")
    );
    Ok(())
}
