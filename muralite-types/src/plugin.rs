//! Host plugin availability notifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a host plugin that became available to the script.
///
/// Delivered once per plugin, after the plugin is ready to accept commands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
}

impl PluginInfo {
    /// Creates a plugin identity.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PluginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}
