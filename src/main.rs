//! # Helmizer CLI
//!
//! This is the binary entry point for the `helmizer` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Handing errors back to the process as a non-zero exit status.
//!
//! The core logic lives in the `helmizer` library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
