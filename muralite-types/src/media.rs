//! Media session events.
//!
//! When the user enables OS media integration, the host forwards the active
//! media session to the script as a family of independent events: an on/off
//! status flag, track metadata, album art with derived colors, a playback
//! state, and a timeline position. Not every media player feeds every
//! channel — a script must work when some of these never arrive.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of content the active media session is playing.
///
/// Exactly three values exist on the wire (`music`, `video`, `image`);
/// anything else is a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaContentType {
    Music,
    Video,
    Image,
}

impl MediaContentType {
    /// The wire string for this content type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Video => "video",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for MediaContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "music" => Ok(Self::Music),
            "video" => Ok(Self::Video),
            "image" => Ok(Self::Image),
            other => Err(Error::InvalidContentType(other.to_string())),
        }
    }
}

/// Playback state of the active media session.
///
/// The wire value is numeric: 0 playing, 1 paused, 2 stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MediaPlaybackState {
    /// Media is actively playing.
    Playing,
    /// Playback was (temporarily) paused by the user.
    Paused,
    /// Playback is completely stopped.
    Stopped,
}

impl From<MediaPlaybackState> for u8 {
    fn from(state: MediaPlaybackState) -> Self {
        match state {
            MediaPlaybackState::Playing => 0,
            MediaPlaybackState::Paused => 1,
            MediaPlaybackState::Stopped => 2,
        }
    }
}

impl TryFrom<u8> for MediaPlaybackState {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Playing),
            1 => Ok(Self::Paused),
            2 => Ok(Self::Stopped),
            other => Err(Error::InvalidPlaybackState(other)),
        }
    }
}

/// Whether the user has media integration enabled in the host settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStatusEvent {
    pub enabled: bool,
}

/// Text metadata of the currently playing track.
///
/// Every field is required on the wire, `contentType` included — sessions
/// without a meaningful value for a text field carry an empty string, never
/// a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPropertiesEvent {
    pub title: String,
    pub artist: String,
    pub sub_title: String,
    pub album_title: String,
    pub album_artist: String,
    pub genres: String,
    pub content_type: MediaContentType,
}

impl Default for MediaPropertiesEvent {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            sub_title: String::new(),
            album_title: String::new(),
            album_artist: String::new(),
            genres: String::new(),
            content_type: MediaContentType::Music,
        }
    }
}

/// Album art of the currently playing track plus colors derived from it.
///
/// `thumbnail` is a base64-encoded image. The color fields are CSS color
/// strings extracted by the host: three dominant colors, a text color
/// guaranteed to contrast with the primary, and a black-or-white
/// high-contrast color.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaThumbnailEvent {
    pub thumbnail: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub tertiary_color: String,
    pub text_color: String,
    pub high_contrast_color: String,
}

/// Playback state change of the active media session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPlaybackEvent {
    pub state: MediaPlaybackState,
}

/// Position within the currently playing track.
///
/// Both fields are in seconds. Not all media players report a timeline;
/// scripts must work when this event never arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediaTimelineEvent {
    /// Current position of the track.
    pub position: f64,
    /// Total duration of the track.
    pub duration: f64,
}

impl MediaTimelineEvent {
    /// Whether the event satisfies the timeline contract: both fields
    /// finite and non-negative, with `position <= duration`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.position.is_finite()
            && self.duration.is_finite()
            && self.position >= 0.0
            && self.duration >= 0.0
            && self.position <= self.duration
    }

    /// Completion ratio in `0.0..=1.0`, or `None` for a zero-length or
    /// inconsistent timeline.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        if self.is_consistent() && self.duration > 0.0 {
            Some(self.position / self.duration)
        } else {
            None
        }
    }
}
