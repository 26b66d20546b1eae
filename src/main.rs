//! CLI entry point for constrained edge walks over feature masks

use clap::Parser;
use edgewalk::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> edgewalk::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
