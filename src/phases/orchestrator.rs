//! Orchestrator for a complete helmizer run
//!
//! This module coordinates all phases behind a single call.

use std::io::Write;

use log::debug;

use super::{prepare, write, RunOptions};
use crate::config::{Config, DEFAULT_KUSTOMIZATION_FILE_NAME};
use crate::error::Result;
use crate::kustomization::Kustomization;
use crate::path;

/// Execute a complete run (Phases 1-3)
///
/// 1. Run the command sequence in the config file's directory, unless
///    `options.skip_commands` is set
/// 2. Assemble the kustomization and sort it if `helmizer.sort-keys` is true
/// 3. Print it to `out`, then write it to
///    `<kustomization-directory>/<kustomization-file-name>` unless either
///    `options.dry_run` or `helmizer.dry-run` is set
///
/// Returns the assembled document.
pub fn execute<W: Write>(config: &Config, options: &RunOptions, out: &mut W) -> Result<Kustomization> {
    // Phase 1: Command Sequence
    if options.skip_commands {
        debug!("Skipping commandSequence");
    } else {
        prepare::execute(&config.command_sequence(), config.base_dir(), options.quiet)?;
    }

    // Phase 2: Assembly
    let mut kustomization = Kustomization::assemble(config);
    if config.get::<bool>("helmizer.sort-keys").unwrap_or(false) {
        kustomization.sort_keys();
    }

    // Phase 3: Output
    let dry_run = options.dry_run || config.get::<bool>("helmizer.dry-run").unwrap_or(false);
    let target = if dry_run {
        None
    } else {
        let file_name = config
            .get::<String>("helmizer.kustomization-file-name")
            .unwrap_or_else(|_| DEFAULT_KUSTOMIZATION_FILE_NAME.to_string());
        Some(path::normalize(&config.kustomization_dir().join(file_name)))
    };
    write::execute(&kustomization, target.as_deref(), out)?;

    Ok(kustomization)
}
