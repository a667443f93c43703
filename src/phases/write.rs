//! Phase 3: Output
//!
//! Renders the kustomization, prints it, and writes it to disk.
//!
//! ## Process
//!
//! 1.  **Render**: Serialize the document to YAML in fixed key order.
//!
//! 2.  **Print**: Write the rendered document to the given output stream
//!     (standard output for the CLI). This always happens.
//!
//! 3.  **Write**: Unless the run is a dry run, write the same text to the
//!     target file, replacing any existing file. A directory at the target
//!     path is an error.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::kustomization::Kustomization;

/// Execute Phase 3: print the document and, if `target` is given, write it.
pub fn execute<W: Write>(kustomization: &Kustomization, target: Option<&Path>, out: &mut W) -> Result<()> {
    debug!("Rendering template");
    let rendered = kustomization.to_yaml()?;

    writeln!(out, "{}", rendered)?;
    out.flush()?;

    match target {
        Some(path) => write_file(path, &rendered),
        None => {
            debug!("Performing dry-run, not writing to a file system");
            Ok(())
        }
    }
}

fn write_file(path: &Path, rendered: &str) -> Result<()> {
    if path.is_dir() {
        return Err(Error::WriteTargetIsDirectory {
            path: path.display().to_string(),
        });
    }

    fs::write(path, rendered).map_err(|e| Error::Filesystem {
        message: format!("Failed to write file '{}': {}", path.display(), e),
    })?;

    debug!("Successfully wrote to file: {}", path.display());
    Ok(())
}
