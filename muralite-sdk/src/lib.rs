//! SDK for authoring Muralite wallpaper scripts.
//!
//! A wallpaper script is a type implementing [`WallpaperScript`]. Every
//! method has a no-op default body — a script implements only the events it
//! cares about and ignores the rest, exactly as the host treats every
//! listener slot as optional.
//!
//! Push-style channels the host drives on its own cadence (audio frames,
//! media session events) are not part of this trait; a script subscribes to
//! those by registering closures on the host's `ListenerRegistry`
//! (`muralite-host`).
//!
//! # Example
//!
//! ```
//! use muralite_sdk::prelude::*;
//!
//! #[derive(Default)]
//! struct Slideshow {
//!     interval_secs: f64,
//!     files: Vec<String>,
//! }
//!
//! impl WallpaperScript for Slideshow {
//!     fn apply_user_properties(&mut self, properties: &UserPropertyUpdate) {
//!         // Only changed properties arrive; always check for presence.
//!         if let Some(value) = properties.value_of("interval") {
//!             if let Some(secs) = value.as_f64() {
//!                 self.interval_secs = secs;
//!             }
//!         }
//!     }
//!
//!     fn user_directory_files_added_or_changed(
//!         &mut self,
//!         _property_name: &str,
//!         changed_files: &[String],
//!     ) {
//!         self.files.extend_from_slice(changed_files);
//!     }
//!
//!     fn user_directory_files_removed(&mut self, _property_name: &str, removed_files: &[String]) {
//!         self.files.retain(|f| !removed_files.contains(f));
//!     }
//! }
//! ```

pub mod prelude;

pub use muralite_types::{
    AudioFrame, GeneralProperties, MediaContentType, MediaPlaybackEvent, MediaPlaybackState,
    MediaPropertiesEvent, MediaStatusEvent, MediaThumbnailEvent, MediaTimelineEvent, PluginInfo,
    PropertyValue, UserPropertyUpdate,
};

/// The host→script listener surface of a wallpaper script.
///
/// The host calls these methods; a script never calls them on itself. All
/// delivery happens on a single, host-controlled callback channel with no
/// ordering guarantee across different event kinds.
pub trait WallpaperScript {
    /// Called on load and whenever one or more user-editable properties
    /// change. `properties` carries only the changed subset — an omitted
    /// property is unchanged, never cleared.
    fn apply_user_properties(&mut self, _properties: &UserPropertyUpdate) {}

    /// Called for engine-wide settings such as the target frame rate.
    fn apply_general_properties(&mut self, _properties: &GeneralProperties) {}

    /// Called when files were added to (or modified in) a directory-backed
    /// property in bulk-file mode. Such properties never arrive through
    /// [`apply_user_properties`](Self::apply_user_properties).
    fn user_directory_files_added_or_changed(
        &mut self,
        _property_name: &str,
        _changed_files: &[String],
    ) {
    }

    /// Called when files were removed from a directory-backed property in
    /// bulk-file mode.
    fn user_directory_files_removed(&mut self, _property_name: &str, _removed_files: &[String]) {}

    /// Called once per host plugin, after that plugin becomes available.
    fn on_plugin_loaded(&mut self, _plugin: &PluginInfo) {}
}
