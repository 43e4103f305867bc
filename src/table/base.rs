//! Base Table implementation
//!
//! BTreeMap-based table of committed values.

use std::collections::btree_map::{self, BTreeMap};

/// Committed key/value mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseTable {
    data: BTreeMap<String, String>,
}

impl BaseTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the committed value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Insert or overwrite a key
    pub fn put(&mut self, key: String, value: String) {
        self.data.insert(key, value);
    }

    /// Remove a key; absent keys are ignored
    pub fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of committed keys
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the table holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over committed entries in key order
    pub fn iter(&self) -> BaseTableIter<'_> {
        BaseTableIter {
            inner: self.data.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a BaseTable {
    type Item = (&'a str, &'a str);
    type IntoIter = BaseTableIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over BaseTable entries
pub struct BaseTableIter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for BaseTableIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
