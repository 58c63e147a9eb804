//! Binary entry point: argument parsing, logging setup, and the run loop.

mod cli;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use anketa::{files, pipeline, FilterCriteria};

use crate::cli::Cli;

#[cfg(not(tarpaulin_include))]
fn main() {
    let args = Cli::parse();
    init_tracing();

    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Stderr logging; per-record skip diagnostics show at the default `warn`
/// level, overridable through `RUST_LOG`.
#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: Cli) -> Result<()> {
    let text = files::read_source(&args.input)?;

    let criteria = FilterCriteria::new(args.letter, args.alphabet);
    let outcome = pipeline::run(&text, &criteria);

    files::write_records(&args.output, &outcome.records)?;

    println!("Matching records: {}", outcome.count);
    println!("Results written to '{}'.", args.output.display());
    Ok(())
}
