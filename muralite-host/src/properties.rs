//! Current view of user properties, built from changed-subset updates.
//!
//! The host only ever delivers the properties that changed. This cache is
//! the binding-layer embodiment of "absence means unchanged": merging an
//! update touches exactly the keys the update carries and nothing else.

use crate::HostError;
use muralite_types::{PropertyValue, UserPropertyUpdate};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Accumulated user property state plus directory-mode bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct PropertyCache {
    values: HashMap<String, PropertyValue>,
    directory_backed: HashSet<String>,
}

impl PropertyCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a changed-subset update into the cache. Keys absent from the
    /// update keep their previous value; a present key with an empty slot
    /// records the explicit absence of a scalar value.
    pub fn apply(&mut self, update: UserPropertyUpdate) {
        for (name, value) in update {
            self.values.insert(name, value);
        }
    }

    /// Marks `name` as a directory-backed property in bulk-file mode.
    /// Such properties report through the file diff path, never through
    /// the generic value path.
    pub fn mark_directory_backed(&mut self, name: impl Into<String>) {
        self.directory_backed.insert(name.into());
    }

    #[must_use]
    pub fn is_directory_backed(&self, name: &str) -> bool {
        self.directory_backed.contains(name)
    }

    /// The current scalar value of `name`, if one was ever delivered.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.values.get(name).and_then(|p| p.value.as_ref())
    }

    /// The current slot of `name`, including valueless slots.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serializes the full current property state as one JSON object.
    pub fn snapshot(&self) -> Result<Value, HostError> {
        Ok(serde_json::to_value(&self.values)?)
    }
}
