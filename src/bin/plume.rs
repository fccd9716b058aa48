//! Plume CLI binary.

use std::io;
use std::process;

use clap::Parser;
use plume::cli::{args::*, commands::*};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command line arguments using clap
    let args = PlumeArgs::parse();

    // RUST_LOG wins over the verbosity flags
    let level = match args.verbosity() {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    }
    .as_str()
    .to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plume={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
