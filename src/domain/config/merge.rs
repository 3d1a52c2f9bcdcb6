//! One-level union of configuration mappings.

use serde_json::{Map, Value};

/// Which side wins when a key is present both on disk and in the update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// On-disk values win; the update only fills keys that are not yet set.
    #[default]
    PreserveExisting,
    /// Update values win.
    PreferIncoming,
}

/// Merge top-level keys of `existing` and `incoming`. Nested values are
/// replaced whole, never merged.
pub fn merge_mappings(
    existing: &Map<String, Value>,
    incoming: &Map<String, Value>,
    policy: MergePolicy,
) -> Map<String, Value> {
    let (base, overlay) = match policy {
        MergePolicy::PreserveExisting => (incoming, existing),
        MergePolicy::PreferIncoming => (existing, incoming),
    };

    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
