//! # Error Handling
//!
//! This module defines the error types for `helmizer`. Two families exist,
//! and the split is the boundary between degrading and failing:
//!
//! - **`LookupError`**: returned by every configuration lookup. A missing key
//!   or a value of the wrong shape is never fatal; call sites map it to a
//!   default or drop the field.
//!
//! - **`Error`**: everything that must surface to the top level and end the
//!   run with a non-zero status, such as a missing configuration file, a
//!   failing preparatory command or a write target that is a directory.
//!
//! **`Result<T>`** is a type alias for `std::result::Result<T, Error>`.

use thiserror::Error;

/// Main error type for helmizer operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file passed on the command line does not exist.
    #[error("Unable to locate helmizer config. Path provided: {path}")]
    ConfigNotFound { path: String },

    /// The configuration file exists but is not a valid YAML document.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The kustomization output path names an existing directory.
    #[error("Cannot write kustomization: {path} is a directory")]
    WriteTargetIsDirectory { path: String },

    /// A command from the command sequence could not be started.
    #[error("Failed to execute command '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// A command from the command sequence exited unsuccessfully.
    #[error("Command '{command}' failed {}", code.map(|c| format!("with exit code {}", c)).unwrap_or_else(|| "without an exit code (terminated by signal)".to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    /// An error occurred with a filesystem operation.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A semantic versioning parsing error, wrapped from `semver::Error`.
    #[error("Semver parsing error: {0}")]
    Semver(#[from] semver::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of a configuration lookup that did not produce a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No value exists at the key path.
    #[error("key not found: {key}")]
    NotFound { key: String },

    /// A value exists but cannot be read as the requested type.
    #[error("key {key} is not a {expected}: {message}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        message: String,
    },
}
