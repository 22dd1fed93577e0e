//! Host→script dispatcher.
//!
//! Drives the optional listener slots of a `WallpaperScript` and enforces
//! the routing rules the raw trait cannot express on its own:
//! - generic property updates for directory-backed properties are dropped
//!   (those properties report exclusively through the file diff path)
//! - the plugin-loaded notification fires at most once per plugin name
//! - the property cache accumulates every delivered value so the host can
//!   answer "what is the current state" at any time

use crate::PropertyCache;
use muralite_sdk::WallpaperScript;
use muralite_types::{GeneralProperties, PluginInfo, UserPropertyUpdate};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Per-script dispatch state for the host→script direction.
#[derive(Default)]
pub struct ScriptDispatcher {
    properties: PropertyCache,
    loaded_plugins: HashSet<String>,
}

impl ScriptDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` as a directory-backed property in bulk-file mode
    /// before the first delivery. Updates for it will be routed away from
    /// the generic property path.
    pub fn declare_directory_property(&mut self, name: impl Into<String>) {
        self.properties.mark_directory_backed(name);
    }

    /// Delivers a changed-subset property update.
    ///
    /// Directory-backed properties are stripped from the update with a
    /// warning; whatever remains is merged into the cache and forwarded.
    /// An update that strips down to nothing is not forwarded at all.
    pub fn apply_user_properties(
        &mut self,
        script: &mut dyn WallpaperScript,
        update: UserPropertyUpdate,
    ) {
        let filtered: UserPropertyUpdate = update
            .into_iter()
            .filter(|(name, _)| {
                if self.properties.is_directory_backed(name) {
                    warn!(
                        property = %name,
                        "directory-backed property delivered on the generic path, dropping"
                    );
                    false
                } else {
                    true
                }
            })
            .collect();

        if filtered.is_empty() {
            return;
        }
        trace!(changed = filtered.len(), "applying user properties");
        self.properties.apply(filtered.clone());
        script.apply_user_properties(&filtered);
    }

    /// Delivers engine-wide settings.
    pub fn apply_general_properties(
        &mut self,
        script: &mut dyn WallpaperScript,
        properties: &GeneralProperties,
    ) {
        trace!(fps = properties.fps, "applying general properties");
        script.apply_general_properties(properties);
    }

    /// Delivers an added/modified file diff for a directory-backed
    /// property.
    pub fn directory_files_added_or_changed(
        &mut self,
        script: &mut dyn WallpaperScript,
        property_name: &str,
        changed_files: &[String],
    ) {
        trace!(property = %property_name, count = changed_files.len(), "directory files added/changed");
        script.user_directory_files_added_or_changed(property_name, changed_files);
    }

    /// Delivers a removed file diff for a directory-backed property.
    pub fn directory_files_removed(
        &mut self,
        script: &mut dyn WallpaperScript,
        property_name: &str,
        removed_files: &[String],
    ) {
        trace!(property = %property_name, count = removed_files.len(), "directory files removed");
        script.user_directory_files_removed(property_name, removed_files);
    }

    /// Notifies the script that a host plugin became available. Repeat
    /// notifications for the same plugin name are suppressed.
    pub fn notify_plugin_loaded(&mut self, script: &mut dyn WallpaperScript, plugin: &PluginInfo) {
        if !self.loaded_plugins.insert(plugin.name.clone()) {
            warn!(plugin = %plugin.name, "duplicate plugin-loaded notification suppressed");
            return;
        }
        debug!(plugin = %plugin, "plugin loaded");
        script.on_plugin_loaded(plugin);
    }

    /// The accumulated property state delivered to this script so far.
    #[must_use]
    pub fn properties(&self) -> &PropertyCache {
        &self.properties
    }
}
