//! Generate command implementation
//!
//! Loads the helmizer config, runs the preparatory command sequence and emits
//! the kustomization document.

use anyhow::Result;
use clap::Args;
use std::io;
use std::path::PathBuf;

use helmizer::config::Config;
use helmizer::phases::{orchestrator, RunOptions};
use helmizer::version;

/// Arguments for generating a kustomization
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to helmizer config file
    #[arg(value_name = "HELMIZER_CONFIG")]
    pub helmizer_config: PathBuf,

    /// Do not write to a file system
    #[arg(long)]
    pub dry_run: bool,

    /// Skip executing commandSequence, just generate kustomization file
    #[arg(long)]
    pub skip_commands: bool,

    /// Quiet output from subprocesses
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = Config::from_file(&args.helmizer_config)?;

    version::validate_config_version(&config)?;

    let options = RunOptions {
        dry_run: args.dry_run,
        skip_commands: args.skip_commands,
        quiet: args.quiet,
    };

    let mut stdout = io::stdout().lock();
    orchestrator::execute(&config, &options, &mut stdout)?;

    Ok(())
}
