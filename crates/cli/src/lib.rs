//! # `mapping2csv` CLI Library Crate
//!
//! Argument definitions and the `run` entrypoint behind the `mapping2csv` binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

// --- CLI Argument Structs ---

/// Translate JSON to CSV
///
/// Lists every property of an ElasticSearch index mapping as `name,type` rows.
#[derive(Parser, Debug)]
#[command(name = "mapping2csv", author, version, about, long_about = None)]
pub struct Cli {
    /// JSON document filepath
    #[arg(short = 'f', long)]
    pub filepath: PathBuf,
}

// --- Public Entrypoint ---

/// Converts the mapping at `cli.filepath` and writes the CSV to `out`.
///
/// The whole CSV is rendered before anything is written, so a failing input
/// leaves `out` untouched.
pub fn run<W: Write>(cli: Cli, mut out: W) -> Result<()> {
    info!("Starting conversion with args: {:?}", cli);

    let records = mapping2csv::read_mapping_file(&cli.filepath).with_context(|| {
        format!("Failed to convert mapping '{}'", cli.filepath.display())
    })?;
    let csv = mapping2csv::to_csv_string(&records).context("Failed to render CSV")?;

    out.write_all(csv.as_bytes()).context("Failed to write CSV to output")?;
    out.flush().context("Failed to flush output")?;

    info!("Wrote {} properties", records.len());
    Ok(())
}
