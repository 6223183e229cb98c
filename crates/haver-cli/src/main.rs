//! `haver` CLI — generate a synthetic point set, round-trip it through the
//! JSON scanner/parser, and compare the recovered mean haversine distance
//! against the generator's own.
//!
//! ## Usage
//!
//! ```sh
//! # Generate and round-trip 10000 point pairs
//! haver 10000
//!
//! # Reproducible run with a fixed seed, printing per-stage timings
//! haver 10000 --seed 42 --profile
//!
//! # Put the generated JSON somewhere other than ./data
//! haver 1000 --data-dir /tmp/points
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use haver_core::{generator, parser, reduce, scanner, Profiler};

#[derive(Parser)]
#[command(name = "haver", version, about = "Haversine JSON round-trip harness")]
struct Cli {
    /// Number of point pairs to generate
    count: u32,

    /// Seed for the point generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the generated JSON document
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Print per-stage timing after the run
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut profiler = Profiler::new();

    println!("# Points: {}", cli.count);

    let set = profiler
        .record("generate", || {
            generator::generate_file(cli.count, cli.seed, &cli.data_dir)
        })
        .context("Failed to generate point data")?;
    println!(
        "Real Average Sum: {:.12}",
        mean(set.expected_sum, set.count)
    );

    let bytes = fs::read(&set.path)
        .with_context(|| format!("Failed to read file: {}", set.path.display()))?;

    let tokens = profiler
        .record_bytes("scan", bytes.len() as u64, || scanner::scan(&bytes))
        .context("Failed to scan JSON input")?;

    let root = profiler
        .record("parse", || parser::parse(&tokens))
        .context("Failed to parse token sequence")?;

    let sum = profiler
        .record("reduce", || reduce::points_sum(&root))
        .context("Failed to reduce parsed points")?;
    println!("Computed Average Sum: {:.12}", mean(sum, cli.count));

    if cli.profile {
        print!("{}", profiler.report());
    }

    Ok(())
}

fn mean(sum: f64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}
