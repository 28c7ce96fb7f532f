//! Ordered integer registry.
//!
//! The registry is a plain `BTreeMap`, so iteration always yields keys in
//! ascending numeric order no matter the insertion order. It is owned by
//! whoever runs the print operation; there is no process-wide instance.

use std::collections::BTreeMap;

/// Mapping from integer key to integer value, iterated in ascending key
/// order.
pub type Registry = BTreeMap<i32, i32>;

/// Pair-insert: store `value` under `key` only when the key is absent.
///
/// Returns whether an insertion happened. An existing key keeps its value.
pub fn insert_pair(registry: &mut Registry, key: i32, value: i32) -> bool {
    if registry.contains_key(&key) {
        return false;
    }
    registry.insert(key, value);
    true
}

/// Indexed assignment: store `value` under `key`, overwriting any
/// previous value.
pub fn assign(registry: &mut Registry, key: i32, value: i32) {
    registry.insert(key, value);
}

/// Populate `registry` with the fixed entries `{1: 2, 2: 3}`.
///
/// Key 1 goes in via pair-insert, key 2 via indexed assignment.
pub fn seed(registry: &mut Registry) {
    insert_pair(registry, 1, 2);
    assign(registry, 2, 3);
    log::debug!("registry seeded with {} entries", registry.len());
}

/// Lazy, restartable view of the entries in ascending key order.
pub fn entries(registry: &Registry) -> impl Iterator<Item = (i32, i32)> + '_ {
    registry.iter().map(|(&key, &value)| (key, value))
}
