//! Implementation of the phases of a helmizer run.
//!
//! ## Overview
//!
//! A run follows 3 phases, strictly in sequence:
//! 1. Command Sequence - Run the preparatory commands (optional, fail-fast)
//! 2. Assembly - Build the kustomization from configuration
//! 3. Output - Print the document and write it unless this is a dry run
//!
//! A failure in any phase ends the run; later phases never start.

pub mod orchestrator;
pub mod prepare;
pub mod write;

/// Switches that shape a run, combined from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Suppress writing the kustomization file
    pub dry_run: bool,
    /// Do not run `helmizer.commandSequence`
    pub skip_commands: bool,
    /// Discard output of preparatory commands
    pub quiet: bool,
}
