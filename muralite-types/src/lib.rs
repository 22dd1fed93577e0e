//! Payload and value types for the Muralite script surface.
//!
//! This crate defines every event shape the host can deliver to a wallpaper
//! script and every value a script can hand back:
//! - user property updates (changed-subset maps)
//! - general engine properties (fps and friends)
//! - audio level frames
//! - media session events (status, properties, thumbnail, playback, timeline)
//! - plugin availability notifications
//!
//! Types are plain data with serde representations that match the host's
//! wire shapes exactly (camelCase field names, lowercase content types,
//! numeric playback states). Anything with behavior — callback storage,
//! dispatch, caching — belongs in `muralite-host`, not here.

mod audio;
mod media;
mod plugin;
mod property;

pub use audio::{AudioFrame, BUCKETS_PER_CHANNEL, FRAME_LEN};
pub use media::{
    MediaContentType, MediaPlaybackEvent, MediaPlaybackState, MediaPropertiesEvent,
    MediaStatusEvent, MediaThumbnailEvent, MediaTimelineEvent,
};
pub use plugin::PluginInfo;
pub use property::{GeneralProperties, PropertyValue, UserPropertyUpdate};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or decoding payload types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid media content type: {0:?} (expected music, video or image)")]
    InvalidContentType(String),

    #[error("invalid media playback state: {0} (expected 0, 1 or 2)")]
    InvalidPlaybackState(u8),

    #[error("bad audio frame length: {0} (expected {FRAME_LEN})")]
    BadAudioFrameLen(usize),
}
