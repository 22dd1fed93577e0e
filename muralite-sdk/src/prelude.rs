//! Convenience re-exports for wallpaper script authors.

pub use crate::WallpaperScript;
pub use muralite_types::{
    AudioFrame, GeneralProperties, MediaContentType, MediaPlaybackEvent, MediaPlaybackState,
    MediaPropertiesEvent, MediaStatusEvent, MediaThumbnailEvent, MediaTimelineEvent, PluginInfo,
    PropertyValue, UserPropertyUpdate,
};
