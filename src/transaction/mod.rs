//! Transaction Module
//!
//! Shadow layers stacked above the Base Table.
//!
//! ## Responsibilities
//! - Record sets and deletes issued while the layer is on top
//! - Answer "what is this key's value within this layer"
//! - Replay recorded writes onto the Base Table at commit
//!
//! ## Representation
//! Each layer is a flattened shadow map: a later write to a key overwrites
//! the earlier record for that key in the same layer. A key missing from the
//! map is untouched; a `Tombstone` is a positive delete that hides the key in
//! every layer below.

mod layer;

pub use layer::Transaction;

/// Entry recorded for a touched key in a transaction layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerEntry {
    /// The layer sets the key to this value
    Value(String),

    /// The layer deletes the key
    Tombstone,
}

impl LayerEntry {
    /// The value this entry makes visible, `None` for a tombstone
    pub fn as_value(&self) -> Option<&str> {
        match self {
            LayerEntry::Value(value) => Some(value.as_str()),
            LayerEntry::Tombstone => None,
        }
    }

    /// Check if the entry is a tombstone
    pub fn is_tombstone(&self) -> bool {
        matches!(self, LayerEntry::Tombstone)
    }
}
