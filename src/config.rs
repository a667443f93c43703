//! # Configuration Access
//!
//! This module loads the helmizer configuration file and exposes it as a
//! read-only tree with typed lookups by dotted key path, such as
//! `helmizer.sort-keys` or `kustomize.resources`.
//!
//! ## Lookups degrade, they never fail
//!
//! Every lookup returns `Result<T, LookupError>`. A key that is absent and a
//! key holding a value of the wrong shape are both reported this way, and the
//! caller decides which default applies. Only loading the file itself can
//! produce a fatal [`Error`].
//!
//! ## Recognized keys
//!
//! ```yaml
//! helmizer:
//!   version: "0.8.0"
//!   dry-run: false
//!   kustomization-directory: .
//!   kustomization-file-name: kustomization.yaml
//!   ignore: [templates/secret.yaml]
//!   sort-keys: true
//!   commandSequence:
//!     - command: helm
//!       args: [template, chart, --output-dir, templates]
//! kustomize:
//!   apiVersion: kustomize.config.k8s.io/v1beta1
//!   namespace: default
//!   commonAnnotations: {}
//!   commonLabels: {}
//!   namePrefix: ""
//!   nameSuffix: ""
//!   crds: []
//!   components: []
//!   patchesStrategicMerge: []
//!   resources: [templates]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Error, LookupError, Result};
use crate::path::{absolutize, normalize};

/// Default `kustomize.apiVersion`
pub const DEFAULT_API_VERSION: &str = "kustomize.config.k8s.io/v1beta1";

/// Default `helmizer.kustomization-file-name`
pub const DEFAULT_KUSTOMIZATION_FILE_NAME: &str = "kustomization.yaml";

/// Default `helmizer.kustomization-directory`
pub const DEFAULT_KUSTOMIZATION_DIRECTORY: &str = ".";

/// A parsed helmizer configuration file
#[derive(Debug, Clone)]
pub struct Config {
    root: Value,
    base_dir: PathBuf,
}

impl Config {
    /// Load and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Trying helmizer config path from argument: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ConfigNotFound {
                path: path.display().to_string(),
            },
            _ => Error::Io(e),
        })?;

        Self::parse(&content, path)
    }

    /// Parse configuration content that was read from `path`.
    ///
    /// `path` only anchors relative locations; it is not read.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let root: Value = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(content).map_err(|e| Error::ConfigParse {
                message: format!("{}: {}", path.display(), e),
                hint: Some("The helmizer config must be a YAML mapping".to_string()),
            })?
        };

        let absolute = absolutize(path)?;
        let base_dir = absolute
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::Path {
                message: format!("Config path has no parent: {}", absolute.display()),
            })?;

        debug!("parsed config: {}", absolute.display());
        Ok(Self { root, base_dir })
    }

    /// Absolute directory containing the configuration file.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Absolute anchor directory for kustomization entries.
    ///
    /// This is `helmizer.kustomization-directory` (default `.`) joined onto
    /// [`Config::base_dir`].
    pub fn kustomization_dir(&self) -> PathBuf {
        let directory = self
            .get::<String>("helmizer.kustomization-directory")
            .unwrap_or_else(|_| DEFAULT_KUSTOMIZATION_DIRECTORY.to_string());
        normalize(&self.base_dir.join(directory))
    }

    /// Look up the raw value at a dotted key path.
    pub fn lookup(&self, key: &str) -> std::result::Result<&Value, LookupError> {
        let mut current = &self.root;

        for segment in key.split('.') {
            let mapping = current.as_mapping().ok_or_else(|| LookupError::TypeMismatch {
                key: key.to_string(),
                expected: "mapping",
                message: format!("cannot descend into '{}'", segment),
            })?;
            current = mapping.get(segment).ok_or_else(|| LookupError::NotFound {
                key: key.to_string(),
            })?;
        }

        Ok(current)
    }

    /// Look up and deserialize the value at a dotted key path.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> std::result::Result<T, LookupError> {
        let value = self.lookup(key)?;
        serde_yaml::from_value(value.clone()).map_err(|e| LookupError::TypeMismatch {
            key: key.to_string(),
            expected: std::any::type_name::<T>(),
            message: e.to_string(),
        })
    }

    /// Look up a scalar and render it as a string.
    ///
    /// Unquoted numbers and booleans are accepted, so `version: 0.8` reads as
    /// `"0.8"`.
    pub fn get_scalar_string(&self, key: &str) -> std::result::Result<String, LookupError> {
        let value = self.lookup(key)?;
        scalar_to_string(value).ok_or_else(|| LookupError::TypeMismatch {
            key: key.to_string(),
            expected: "scalar",
            message: format!("unexpected value {:?}", value),
        })
    }

    /// Look up a string-keyed mapping whose values are scalars.
    ///
    /// Numeric and boolean values are rendered as strings. Any nested or null
    /// value makes the whole lookup a type mismatch.
    pub fn get_string_map(
        &self,
        key: &str,
    ) -> std::result::Result<BTreeMap<String, String>, LookupError> {
        let raw: BTreeMap<String, Value> = self.get(key)?;
        raw.into_iter()
            .map(|(k, v)| match scalar_to_string(&v) {
                Some(s) => Ok((k, s)),
                None => Err(LookupError::TypeMismatch {
                    key: format!("{}.{}", key, k),
                    expected: "scalar",
                    message: format!("unexpected value {:?}", v),
                }),
            })
            .collect()
    }

    /// Read the `helmizer.commandSequence` list.
    ///
    /// A missing key is an empty sequence. Entries without a string `command`
    /// are skipped.
    pub fn command_sequence(&self) -> Vec<CommandSpec> {
        let entries = match self.get::<Vec<Value>>("helmizer.commandSequence") {
            Ok(entries) => entries,
            Err(e) => {
                debug!("{}", e);
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|entry| match serde_yaml::from_value::<RawCommandSpec>(entry) {
                Ok(raw) => Some(raw.into()),
                Err(e) => {
                    debug!("Skipping malformed commandSequence entry: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// One preparatory command and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to execute
    pub command: String,
    /// Arguments passed to the program, in order
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Space-joined display form, e.g. `helm template chart`.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.command.clone()
        } else {
            format!("{} {}", self.command, self.args.join(" "))
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCommandSpec {
    command: String,
    #[serde(default)]
    args: Option<Vec<Value>>,
}

impl From<RawCommandSpec> for CommandSpec {
    fn from(raw: RawCommandSpec) -> Self {
        let args = raw
            .args
            .unwrap_or_default()
            .iter()
            .filter_map(scalar_to_string)
            .collect();
        CommandSpec::new(raw.command, args)
    }
}

/// Render a YAML scalar as a string; `None` for null, sequences and mappings.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
