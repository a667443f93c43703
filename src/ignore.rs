//! Ignore-list filtering for aggregated entries

use log::debug;

/// Remove ignored entries from `entries`, in place.
///
/// Each ignore string removes at most one entry: the first one equal to it.
/// Ignore strings with no match are skipped.
pub fn apply(entries: &mut Vec<String>, ignore: &[String]) {
    for ignored in ignore {
        if let Some(position) = entries.iter().position(|entry| entry == ignored) {
            debug!("Removing ignored file from final list: {}", ignored);
            entries.remove(position);
        }
    }
}
