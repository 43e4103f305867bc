//! Transaction layer implementation
//!
//! BTreeMap-based shadow map of pending writes.

use std::collections::BTreeMap;

use super::LayerEntry;
use crate::table::BaseTable;

/// A single open transaction
///
/// Writes never touch the Base Table until the layer is consumed by
/// [`Transaction::apply_to`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    /// Latest record per touched key
    entries: BTreeMap<String, LayerEntry>,

    /// Number of set/delete operations issued, overwrites included
    write_count: usize,
}

impl Transaction {
    /// Create a new empty transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that this layer sets `key` to `value`
    pub fn write(&mut self, key: String, value: String) {
        self.entries.insert(key, LayerEntry::Value(value));
        self.write_count += 1;
    }

    /// Record that this layer deletes `key`
    pub fn delete(&mut self, key: String) {
        self.entries.insert(key, LayerEntry::Tombstone);
        self.write_count += 1;
    }

    /// Check whether this layer has any record for `key`
    pub fn touches(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The value recorded for `key`, `None` if deleted or untouched
    ///
    /// Only meaningful when [`touches`](Self::touches) is true.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(LayerEntry::as_value)
    }

    /// The record for `key`, `None` if untouched
    pub fn get(&self, key: &str) -> Option<&LayerEntry> {
        self.entries.get(key)
    }

    /// Number of write/delete operations issued into this layer
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Number of distinct keys this layer touches
    pub fn touched_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was written in this layer
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replay every record onto the table and consume the layer
    ///
    /// Values are `put`, tombstones are `remove`d. Returns the number of
    /// entries replayed.
    pub fn apply_to(self, table: &mut BaseTable) -> usize {
        let applied = self.entries.len();

        for (key, entry) in self.entries {
            match entry {
                LayerEntry::Value(value) => table.put(key, value),
                LayerEntry::Tombstone => table.remove(&key),
            }
        }

        applied
    }
}
