//! CLI argument parsing, logging setup and command dispatch

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Helmizer - Generates kustomization.yaml for locally-rendered YAML manifests
#[derive(Parser, Debug)]
#[command(name = "helmizer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.debug);
        commands::generate::execute(self.generate)
    }
}

/// Log to stderr at info level, or debug level with `--debug`.
///
/// `RUST_LOG` takes precedence when set.
fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}
