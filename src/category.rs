//! Per-category aggregation of path specifiers
//!
//! Each [`Category`] maps to a `kustomize.<key>` list in the configuration.
//! Aggregating a category resolves every specifier in declaration order and
//! expresses the results relative to the kustomization directory.

use std::fmt;
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::path;

/// Manifest-reference roles of a kustomization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Crds,
    Components,
    PatchesStrategicMerge,
    Resources,
}

impl Category {
    /// All categories, in document order.
    pub const ALL: [Category; 4] = [
        Category::Crds,
        Category::Components,
        Category::PatchesStrategicMerge,
        Category::Resources,
    ];

    /// Field name in the kustomization document.
    pub fn key(self) -> &'static str {
        match self {
            Category::Crds => "crds",
            Category::Components => "components",
            Category::PatchesStrategicMerge => "patchesStrategicMerge",
            Category::Resources => "resources",
        }
    }

    /// Dotted configuration key holding the category's specifiers.
    pub fn config_key(self) -> String {
        format!("kustomize.{}", self.key())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Aggregate one category from the configuration.
///
/// Returns `None` when the key is missing, is not a list of strings, or
/// resolves to nothing.
pub fn aggregate(config: &Config, category: Category) -> Option<Vec<String>> {
    let specifiers = match config.get::<Vec<String>>(&category.config_key()) {
        Ok(specifiers) => specifiers,
        Err(e) => {
            debug!("{}", e);
            return None;
        }
    };

    let entries = resolve_all(&specifiers, &config.kustomization_dir());
    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

/// Resolve specifiers against `anchor` and make the results relative to it.
///
/// Specifier order is preserved, and directory expansions keep walk order.
pub fn resolve_all(specifiers: &[String], anchor: &Path) -> Vec<String> {
    specifiers
        .iter()
        .flat_map(|specifier| path::resolve(specifier, anchor))
        .map(|entry| entry.to_relative(anchor))
        .collect()
}
