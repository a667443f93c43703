//! Property-based tests for path resolution and ignore filtering.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::category::resolve_all;
    use crate::ignore;
    use crate::path::{normalize, relative_to, walk_files};
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn absolute(components: &[String]) -> PathBuf {
        let mut path = PathBuf::from("/");
        for component in components {
            path.push(component);
        }
        path
    }

    // ============================================================================
    // normalize / relative_to property tests
    // ============================================================================

    proptest! {
        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(parts in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 0..8)) {
            let path: PathBuf = parts.iter().collect();
            let once = normalize(&path);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Property: a normalized absolute path has no `.` or `..` components
        #[test]
        fn normalize_absolute_has_no_dot_components(parts in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 0..8)) {
            let mut path = PathBuf::from("/");
            path.extend(&parts);
            let normalized = normalize(&path);
            prop_assert!(normalized.is_absolute());
            prop_assert!(normalized
                .components()
                .all(|c| !matches!(c, std::path::Component::CurDir | std::path::Component::ParentDir)));
        }

        /// Property: joining a relative entry back onto the anchor reproduces the path
        #[test]
        fn relative_round_trip(
            anchor in prop::collection::vec("[a-c]{1,2}", 0..5),
            target in prop::collection::vec("[a-c]{1,2}", 0..6),
        ) {
            let anchor = absolute(&anchor);
            let target = absolute(&target);
            let relative = relative_to(&target, &anchor);
            prop_assert!(relative.is_relative());
            prop_assert_eq!(normalize(&anchor.join(&relative)), target);
        }
    }

    // ============================================================================
    // ignore::apply property tests
    // ============================================================================

    proptest! {
        /// Property: each ignore string removes at most one matching entry
        #[test]
        fn ignore_removes_at_most_one_per_string(
            entries in prop::collection::vec("[a-d]\\.yaml", 0..12),
            ignored in "[a-d]\\.yaml",
        ) {
            let before = entries.iter().filter(|e| **e == ignored).count();
            let mut filtered = entries.clone();
            ignore::apply(&mut filtered, std::slice::from_ref(&ignored));
            let after = filtered.iter().filter(|e| **e == ignored).count();

            prop_assert_eq!(after, before.saturating_sub(1));
            prop_assert_eq!(filtered.len(), entries.len() - (before - after));
        }

        /// Property: ignore strings that match nothing leave the sequence unchanged
        #[test]
        fn ignore_without_match_is_noop(
            entries in prop::collection::vec("[a-d]\\.yaml", 0..12),
            ignored in prop::collection::vec("[e-h]\\.yaml", 0..4),
        ) {
            let mut filtered = entries.clone();
            ignore::apply(&mut filtered, &ignored);
            prop_assert_eq!(filtered, entries);
        }

        /// Property: filtering keeps the relative order of surviving entries
        #[test]
        fn ignore_preserves_order(
            entries in prop::collection::vec("[a-d]\\.yaml", 0..12),
            ignored in prop::collection::vec("[a-d]\\.yaml", 0..4),
        ) {
            let mut filtered = entries.clone();
            ignore::apply(&mut filtered, &ignored);

            let mut remaining = entries.iter();
            for kept in &filtered {
                prop_assert!(remaining.any(|e| e == kept));
            }
        }
    }

    // ============================================================================
    // directory expansion property tests
    // ============================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Property: expanding a directory yields every file at every depth
        #[test]
        fn directory_expansion_is_complete(
            files in prop::collection::btree_set(
                prop::collection::vec("[a-c]{1,2}", 1..5).prop_map(|parts| parts.join("/")),
                1..10,
            )
        ) {
            let temp = TempDir::new().unwrap();
            let root = crate::path::absolutize(temp.path()).unwrap();

            let leaves: BTreeSet<String> = files
                .iter()
                .map(|f| format!("tree/{}.yaml", f))
                .collect();

            for leaf in &leaves {
                let path = root.join(leaf);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(&path, "---\n").unwrap();
            }

            let walked: BTreeSet<PathBuf> = walk_files(&root.join("tree")).into_iter().collect();
            let expected: BTreeSet<PathBuf> = leaves.iter().map(|l| root.join(l)).collect();
            prop_assert_eq!(walked, expected);

            let resolved: BTreeSet<String> = resolve_all(&["tree".to_string()], &root).into_iter().collect();
            prop_assert_eq!(resolved, leaves);
        }
    }
}
