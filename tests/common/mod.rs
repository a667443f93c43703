//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_config(configs::SCENARIO)
//!         .with_file("templates/a.yaml", MANIFEST);
//!     fixture.command().arg("--dry-run").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
    #[allow(unused_imports)]
    pub use super::MANIFEST;
}

/// Content for generated manifest files; helmizer never reads it.
#[allow(dead_code)]
pub const MANIFEST: &str = "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: test\n";

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Configuration with no helmizer or kustomize keys.
    pub const EMPTY: &str = "{}\n";

    /// A file and a directory under `templates/`.
    pub const SCENARIO: &str = r#"
kustomize:
  resources:
    - templates/a.yaml
    - templates/sub
"#;

    /// The scenario plus an ignore entry.
    pub const SCENARIO_WITH_IGNORE: &str = r#"
helmizer:
  ignore:
    - templates/a.yaml
kustomize:
  resources:
    - templates/a.yaml
    - templates/sub
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "kustomize: [unclosed";
}

/// A test fixture that provides a temporary directory with optional config.
///
/// This struct simplifies the common pattern of creating a temp directory
/// and populating it with a `helmizer.yaml` configuration file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `helmizer.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("helmizer.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add the `templates/` tree used by the scenario configs.
    #[allow(dead_code)]
    pub fn with_scenario_tree(self) -> Self {
        self.with_file("templates/a.yaml", MANIFEST)
            .with_file("templates/sub/b.yaml", MANIFEST)
            .with_file("templates/sub/c.yaml", MANIFEST)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("helmizer.yaml")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helmizer");
        cmd.current_dir(self.path());
        cmd
    }

    /// Create a command with the config file path argument.
    pub fn command_with_config(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg(self.config_path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
