//! # Configuration Version Check
//!
//! A helmizer config may declare the tool version it was written for under
//! `helmizer.version`. The declared value is read as a caret requirement
//! (`0.8` means `^0.8`, a leading `v` is allowed) and matched against the
//! running tool's version. The outcome is only ever logged; a mismatch never
//! stops a run.

use log::{debug, warn};
use semver::{Version, VersionReq};

use crate::config::Config;
use crate::error::Result;

/// Version of this build of helmizer
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of checking a declared configuration version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    /// No `helmizer.version` key
    Missing,
    /// The tool satisfies the declared version
    Compatible { declared: String },
    /// The tool does not satisfy the declared version
    Incompatible { declared: String, tool: Version },
    /// The declared value is not a version
    Invalid { declared: String, message: String },
}

/// Check a declared version against `tool`.
pub fn check(declared: &str, tool: &Version) -> VersionCheck {
    let trimmed = declared.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);

    match VersionReq::parse(&format!("^{}", bare)) {
        Ok(requirement) if requirement.matches(tool) => VersionCheck::Compatible {
            declared: declared.to_string(),
        },
        Ok(_) => VersionCheck::Incompatible {
            declared: declared.to_string(),
            tool: tool.clone(),
        },
        Err(e) => VersionCheck::Invalid {
            declared: declared.to_string(),
            message: e.to_string(),
        },
    }
}

/// Check `helmizer.version` against this build and log the outcome.
pub fn validate_config_version(config: &Config) -> Result<VersionCheck> {
    let tool = Version::parse(TOOL_VERSION)?;

    let result = match config.get_scalar_string("helmizer.version") {
        Ok(declared) => {
            debug!("validating helmizer config version: {}", declared);
            check(&declared, &tool)
        }
        Err(e) => {
            debug!("Unable to validate version: {}", e);
            VersionCheck::Missing
        }
    };

    match &result {
        VersionCheck::Missing => {}
        VersionCheck::Compatible { declared } => {
            debug!("helmizer config version {} is supported", declared)
        }
        VersionCheck::Incompatible { declared, tool } => warn!(
            "helmizer config declares version {} but this is helmizer {}",
            declared, tool
        ),
        VersionCheck::Invalid { declared, message } => {
            warn!("Invalid helmizer config version '{}': {}", declared, message)
        }
    }

    Ok(result)
}
