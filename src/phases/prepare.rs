//! Phase 1: Command Sequence
//!
//! Runs the `helmizer.commandSequence` entries one after another before any
//! document work, typically to render Helm charts into the tree that the
//! kustomization will reference.
//!
//! Each entry is spawned directly with its argument vector; no shell is
//! involved, so redirections or pipes need an explicit `sh -c`. Execution
//! blocks on every command with no timeout. The first command that cannot be
//! started or exits unsuccessfully ends the phase with an error, and the
//! remaining entries are never started.

use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::config::CommandSpec;
use crate::error::{Error, Result};

/// Execute Phase 1: run every command in order inside `working_dir`.
///
/// With `quiet`, command output is discarded; otherwise it is inherited.
pub fn execute(sequence: &[CommandSpec], working_dir: &Path, quiet: bool) -> Result<()> {
    debug!("Subprocess working directory: {}", working_dir.display());

    for step in sequence {
        run(step, working_dir, quiet)?;
    }

    Ok(())
}

fn run(step: &CommandSpec, working_dir: &Path, quiet: bool) -> Result<()> {
    let command_line = step.command_line();

    let mut command = Command::new(&step.command);
    command.args(&step.args).current_dir(working_dir);

    if quiet {
        debug!("creating subprocess: '{}'", command_line);
        command.stdout(Stdio::null()).stderr(Stdio::null());
    } else {
        info!("creating subprocess: '{}'", command_line);
        command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    }

    let status = command.status().map_err(|e| Error::CommandSpawn {
        command: command_line.clone(),
        message: e.to_string(),
    })?;

    if !status.success() {
        return Err(Error::CommandFailed {
            command: command_line,
            code: status.code(),
        });
    }

    Ok(())
}
