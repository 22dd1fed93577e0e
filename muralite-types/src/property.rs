//! User property updates and general engine properties.
//!
//! The host's settings UI exposes a set of named, user-editable properties
//! per wallpaper. When one or more of them change (and once on load), the
//! host delivers only the changed subset. A key that is absent from an
//! update is unchanged — it was never "cleared".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The value slot of a single user property.
///
/// The host does not constrain what a property value is — color strings,
/// booleans, numbers and file paths all arrive through the same slot — so
/// the payload is kept as untyped JSON. `value` may be absent for property
/// kinds that carry no scalar value (e.g. directory properties in bulk-file
/// mode, which report through the file diff path instead).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PropertyValue {
    /// Creates a property value holding `value`.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// A slot with no scalar value.
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }
}

/// A changed-subset update of user properties: property name → new value.
///
/// Carries only the properties whose value changed since the last delivery.
/// Consumers must not interpret an omitted key as a cleared property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserPropertyUpdate(HashMap<String, PropertyValue>);

impl UserPropertyUpdate {
    /// An update carrying no changes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a changed property to the update.
    pub fn set(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Whether `name` changed in this update.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The new value of `name`, if it changed in this update.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.0.get(name).and_then(|p| p.value.as_ref())
    }

    /// Iterates over the changed properties.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of changed properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, PropertyValue)> for UserPropertyUpdate {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for UserPropertyUpdate {
    type Item = (String, PropertyValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Engine-wide settings delivered through the general property path.
///
/// Only `fps` is defined today; unknown keys are preserved in `extra` so
/// scripts keep working when the host grows the bag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneralProperties {
    /// Target frame rate the user configured for this wallpaper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl GeneralProperties {
    /// Properties with a target frame rate and nothing else.
    #[must_use]
    pub fn with_fps(fps: f64) -> Self {
        Self {
            fps: Some(fps),
            extra: HashMap::new(),
        }
    }
}
