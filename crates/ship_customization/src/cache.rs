//! Last-processed name per ship
//!
//! A ship is reprocessed only when its display name differs from the name
//! recorded after its last pass. Records are never dropped individually;
//! [`NameCache::reset_all`] clears everything.

use std::collections::HashMap;
use std::hash::Hash;

/// Map from object identity to the last name processed for it
#[derive(Debug, Clone)]
pub struct NameCache<K> {
    records: HashMap<K, String>,
}

impl<K: Eq + Hash> NameCache<K> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Whether `name` differs from the last name committed for `id`
    pub fn should_process(&self, id: &K, name: &str) -> bool {
        self.records.get(id).map_or(true, |last| last != name)
    }

    /// Record `name` as processed for `id`
    pub fn commit(&mut self, id: K, name: impl Into<String>) {
        self.records.insert(id, name.into());
    }

    /// Last committed name for `id`
    pub fn get(&self, id: &K) -> Option<&str> {
        self.records.get(id).map(String::as_str)
    }

    /// Forget every record
    pub fn reset_all(&mut self) {
        self.records.clear();
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the cache holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K: Eq + Hash> Default for NameCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
