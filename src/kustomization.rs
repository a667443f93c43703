//! # Kustomization Document
//!
//! [`Kustomization`] is the document helmizer generates. Its fields are declared
//! in output order, so serialization always emits:
//!
//! `apiVersion`, `kind`, `namespace`, `commonAnnotations`, `commonLabels`,
//! `crds`, `components`, `namePrefix`, `nameSuffix`, `patchesStrategicMerge`,
//! `resources`
//!
//! Every field after `kind` is optional and left out when unset or empty.
//!
//! [`Kustomization::assemble`] builds the document from a [`Config`]: scalar and
//! mapping fields are copied when non-empty, and each path category goes
//! through aggregation and then the global ignore list.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::category::{self, Category};
use crate::config::{Config, DEFAULT_API_VERSION};
use crate::error::Result;
use crate::ignore;

/// Constant `kind` of every generated document
pub const KIND: &str = "Kustomization";

/// A kustomization document with fixed key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kustomization {
    pub api_version: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patches_strategic_merge: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

impl Default for Kustomization {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            kind: KIND.to_string(),
            namespace: None,
            common_annotations: None,
            common_labels: None,
            crds: None,
            components: None,
            name_prefix: None,
            name_suffix: None,
            patches_strategic_merge: None,
            resources: None,
        }
    }
}

impl Kustomization {
    /// Build the document from configuration.
    pub fn assemble(config: &Config) -> Self {
        let api_version = config
            .get::<String>("kustomize.apiVersion")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        debug!("apiVersion: {}", api_version);

        let ignore_list = config.get::<Vec<String>>("helmizer.ignore").unwrap_or_default();

        let mut kustomization = Self {
            api_version,
            namespace: non_empty_string(config, "kustomize.namespace"),
            common_annotations: non_empty_map(config, "kustomize.commonAnnotations"),
            common_labels: non_empty_map(config, "kustomize.commonLabels"),
            name_prefix: non_empty_string(config, "kustomize.namePrefix"),
            name_suffix: non_empty_string(config, "kustomize.nameSuffix"),
            ..Self::default()
        };

        for category in Category::ALL {
            let entries = collect_category(config, category, &ignore_list);
            *kustomization.category_mut(category) = entries;
        }

        kustomization
    }

    /// Sort `resources` and `patchesStrategicMerge` lexicographically.
    ///
    /// `crds` and `components` keep their order.
    pub fn sort_keys(&mut self) {
        for entries in [&mut self.resources, &mut self.patches_strategic_merge]
            .into_iter()
            .flatten()
        {
            entries.sort();
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut Option<Vec<String>> {
        match category {
            Category::Crds => &mut self.crds,
            Category::Components => &mut self.components,
            Category::PatchesStrategicMerge => &mut self.patches_strategic_merge,
            Category::Resources => &mut self.resources,
        }
    }

    /// Serialize to YAML in fixed key order.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn collect_category(config: &Config, category: Category, ignore_list: &[String]) -> Option<Vec<String>> {
    let mut entries = category::aggregate(config, category)?;
    ignore::apply(&mut entries, ignore_list);
    if entries.is_empty() {
        None
    } else {
        debug!("{}: {:?}", category, entries);
        Some(entries)
    }
}

fn non_empty_string(config: &Config, key: &str) -> Option<String> {
    let value = config.get::<String>(key).ok().filter(|s| !s.is_empty())?;
    debug!("{}: {}", key, value);
    Some(value)
}

fn non_empty_map(config: &Config, key: &str) -> Option<BTreeMap<String, String>> {
    let value = config.get_string_map(key).ok().filter(|m| !m.is_empty())?;
    debug!("{}: {:?}", key, value);
    Some(value)
}
