//! # Helmizer Library
//!
//! This library generates a `kustomization.yaml` for locally-rendered YAML
//! manifests, such as the output of `helm template` or hand-written files. It
//! backs the `helmizer` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use helmizer::config::Config;
//! use helmizer::kustomization::Kustomization;
//! use std::path::Path;
//!
//! let config = Config::parse(
//!     "kustomize:\n  namespace: apps\n  namePrefix: prod-\n",
//!     Path::new("/work/helmizer.yaml"),
//! )
//! .unwrap();
//!
//! let kustomization = Kustomization::assemble(&config);
//! assert_eq!(kustomization.namespace.as_deref(), Some("apps"));
//! assert_eq!(kustomization.kind, "Kustomization");
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: Read-only access to the helmizer YAML file.
//!   Missing or mistyped keys degrade to defaults instead of failing.
//! - **Path resolution (`path`)**: Expands a file, a directory or a URL into
//!   entries relative to the kustomization directory.
//! - **Categories (`category`)**: The four path lists of a kustomization
//!   (`crds`, `components`, `patchesStrategicMerge`, `resources`).
//! - **Ignore list (`ignore`)**: Removes configured entries from each list.
//! - **Document (`kustomization`)**: The generated document with its fixed key
//!   order.
//! - **Phases (`phases`)**: The run pipeline, from the preparatory command
//!   sequence to writing the file.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator::execute`:
//!
//! 1.  **Command Sequence**: Run `helmizer.commandSequence` in the config
//!     file's directory, stopping at the first failure.
//! 2.  **Assembly**: Build the kustomization and sort it if requested.
//! 3.  **Output**: Print the document and write it unless this is a dry run.

pub mod category;
pub mod config;
pub mod error;
pub mod ignore;
pub mod kustomization;
pub mod path;
pub mod phases;
pub mod version;

#[cfg(test)]
mod path_proptest;
