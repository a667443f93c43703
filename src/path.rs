//! Path resolution for kustomization entries
//!
//! A path specifier names a file, a directory to expand recursively, or a
//! remote URL. Resolution happens against an anchor directory and produces
//! [`ResolvedEntry`] values, which are later expressed relative to that same
//! anchor for the output document.
//!
//! All path arithmetic here is lexical: nothing is canonicalized, so symlinked
//! trees keep the names the author wrote.

use std::path::{Component, Path, PathBuf};

use log::{debug, warn};
use url::Url;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// A single expansion result of a path specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedEntry {
    /// Absolute, normalized path to a regular file
    File(PathBuf),
    /// Remote resource, carried verbatim
    Url(String),
}

impl ResolvedEntry {
    /// Express the entry relative to `anchor`.
    ///
    /// URLs are returned unchanged.
    pub fn to_relative(&self, anchor: &Path) -> String {
        match self {
            ResolvedEntry::File(path) => {
                let relative = relative_to(path, anchor);
                match relative.to_str() {
                    Some(s) => s.to_string(),
                    None => {
                        let lossy = relative.to_string_lossy().into_owned();
                        warn!(
                            "Path {} is not valid UTF-8, emitting '{}' which may not name an existing file",
                            relative.display(),
                            lossy
                        );
                        lossy
                    }
                }
            }
            ResolvedEntry::Url(url) => url.clone(),
        }
    }
}

/// Expand one path specifier against `anchor`.
///
/// `anchor` must be absolute and normalized. An existing directory yields every
/// regular file beneath it, an existing file yields itself, and a well-formed
/// URL yields the literal specifier. Anything else yields nothing.
pub fn resolve(specifier: &str, anchor: &Path) -> Vec<ResolvedEntry> {
    let candidate = normalize(&anchor.join(specifier));

    if candidate.is_dir() {
        walk_files(&candidate)
            .into_iter()
            .map(ResolvedEntry::File)
            .collect()
    } else if candidate.is_file() {
        vec![ResolvedEntry::File(candidate)]
    } else if is_url(specifier) {
        vec![ResolvedEntry::Url(specifier.to_string())]
    } else {
        debug!("Skipping unresolvable path: {}", specifier);
        Vec::new()
    }
}

/// List every regular file beneath `root`, at any depth.
///
/// Entries are visited depth first in file-name order. Symlinked files are
/// listed, but symlinked directories are not descended into. Entries that
/// cannot be read are logged and skipped.
pub fn walk_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// Check whether `candidate` is a syntactically valid URL with a host.
///
/// No network access is attempted.
pub fn is_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => !url.cannot_be_a_base() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Make `path` absolute against the current directory and normalize it.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| Error::Path {
        message: format!("Failed to make '{}' absolute: {}", path.display(), e),
    })?;
    Ok(normalize(&absolute))
}

/// Lexically normalize a path.
///
/// `.` components are dropped and `..` removes the preceding normal component.
/// A `..` directly under the root stays at the root. Leading `..` components of
/// a relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Compute `path` relative to `base`.
///
/// Both paths must be normalized and share the same root. Components of `base`
/// that are not shared become `..`.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path: Vec<Component> = path.components().collect();
    let base: Vec<Component> = base.components().collect();

    let common = path
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &path[common..] {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}
