//! # mapping2csv: ElasticSearch Mapping to CSV
//!
//! This is the main entry point for the `mapping2csv` command-line interface.
//! The binary is a thin entrypoint; all logic lives in the `mapping2csv_cli`
//! library crate.

use anyhow::Result;
use clap::Parser;
use mapping2csv_cli::{run, Cli};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // 1. Setup logging. Stdout is reserved for the CSV.
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mapping2csv=warn".parse()?))
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 2. Parse CLI arguments. Usage errors exit here with clap's status code.
    let cli = Cli::parse();

    // 3. Run the conversion and report failures on stderr.
    if let Err(e) = run(cli, io::stdout().lock()) {
        eprintln!("[mapping2csv error] {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
