//! Listener registry: the script→host registration surface.
//!
//! Each push channel (audio, media status/properties/thumbnail/playback/
//! timeline) holds at most one callback for the lifetime of the script.
//! Registering again replaces the previous callback — last registration
//! wins. Random-file requests are keyed per property name.
//!
//! The host side drives delivery through the `deliver_*` methods. Delivery
//! on a channel nobody registered is a silent no-op; no method returns a
//! status. Each delivery is atomic and independent of every other channel.

use muralite_types::{
    AudioFrame, MediaPlaybackEvent, MediaPropertiesEvent, MediaStatusEvent, MediaThumbnailEvent,
    MediaTimelineEvent,
};
use std::collections::HashMap;
use tracing::{trace, warn};

pub type AudioListener = Box<dyn FnMut(&AudioFrame) + Send>;
pub type MediaStatusListener = Box<dyn FnMut(&MediaStatusEvent) + Send>;
pub type MediaPropertiesListener = Box<dyn FnMut(&MediaPropertiesEvent) + Send>;
pub type MediaThumbnailListener = Box<dyn FnMut(&MediaThumbnailEvent) + Send>;
pub type MediaPlaybackListener = Box<dyn FnMut(&MediaPlaybackEvent) + Send>;
pub type MediaTimelineListener = Box<dyn FnMut(&MediaTimelineEvent) + Send>;

/// Receives `(property_name, file_path)` when the host picks a random file
/// from a directory-backed property.
pub type RandomFileListener = Box<dyn FnMut(&str, &str) + Send>;

/// Stores the script's registered listeners and routes host deliveries to
/// them.
#[derive(Default)]
pub struct ListenerRegistry {
    audio: Option<AudioListener>,
    media_status: Option<MediaStatusListener>,
    media_properties: Option<MediaPropertiesListener>,
    media_thumbnail: Option<MediaThumbnailListener>,
    media_playback: Option<MediaPlaybackListener>,
    media_timeline: Option<MediaTimelineListener>,
    random_file: HashMap<String, RandomFileListener>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ================================================================
    // Registration (script → host)
    // ================================================================

    /// Registers the audio level listener.
    pub fn register_audio_listener(&mut self, callback: impl FnMut(&AudioFrame) + Send + 'static) {
        if self.audio.replace(Box::new(callback)).is_some() {
            trace!(channel = "audio", "listener replaced");
        }
    }

    /// Registers the media integration on/off listener.
    pub fn register_media_status_listener(
        &mut self,
        callback: impl FnMut(&MediaStatusEvent) + Send + 'static,
    ) {
        if self.media_status.replace(Box::new(callback)).is_some() {
            trace!(channel = "media_status", "listener replaced");
        }
    }

    /// Registers the track metadata listener.
    pub fn register_media_properties_listener(
        &mut self,
        callback: impl FnMut(&MediaPropertiesEvent) + Send + 'static,
    ) {
        if self.media_properties.replace(Box::new(callback)).is_some() {
            trace!(channel = "media_properties", "listener replaced");
        }
    }

    /// Registers the album art listener.
    pub fn register_media_thumbnail_listener(
        &mut self,
        callback: impl FnMut(&MediaThumbnailEvent) + Send + 'static,
    ) {
        if self.media_thumbnail.replace(Box::new(callback)).is_some() {
            trace!(channel = "media_thumbnail", "listener replaced");
        }
    }

    /// Registers the playback state listener.
    pub fn register_media_playback_listener(
        &mut self,
        callback: impl FnMut(&MediaPlaybackEvent) + Send + 'static,
    ) {
        if self.media_playback.replace(Box::new(callback)).is_some() {
            trace!(channel = "media_playback", "listener replaced");
        }
    }

    /// Registers the track position listener.
    pub fn register_media_timeline_listener(
        &mut self,
        callback: impl FnMut(&MediaTimelineEvent) + Send + 'static,
    ) {
        if self.media_timeline.replace(Box::new(callback)).is_some() {
            trace!(channel = "media_timeline", "listener replaced");
        }
    }

    /// Asks the host to pick a random file from the directory-backed
    /// property `property_name`. The callback receives the property name
    /// and the chosen file path when the host fulfills the request.
    pub fn request_random_file(
        &mut self,
        property_name: impl Into<String>,
        callback: impl FnMut(&str, &str) + Send + 'static,
    ) {
        let property_name = property_name.into();
        if self
            .random_file
            .insert(property_name.clone(), Box::new(callback))
            .is_some()
        {
            trace!(property = %property_name, "random-file callback replaced");
        }
    }

    // ================================================================
    // Delivery (host → registered listeners)
    // ================================================================

    /// Delivers one frame of audio levels.
    pub fn deliver_audio(&mut self, frame: &AudioFrame) {
        if let Some(listener) = &mut self.audio {
            trace!(peak = frame.peak(), "delivering audio frame");
            listener(frame);
        }
    }

    /// Delivers a media integration on/off change.
    pub fn deliver_media_status(&mut self, event: &MediaStatusEvent) {
        if let Some(listener) = &mut self.media_status {
            trace!(enabled = event.enabled, "delivering media status");
            listener(event);
        }
    }

    /// Delivers track metadata.
    pub fn deliver_media_properties(&mut self, event: &MediaPropertiesEvent) {
        if let Some(listener) = &mut self.media_properties {
            trace!(title = %event.title, "delivering media properties");
            listener(event);
        }
    }

    /// Delivers album art and derived colors.
    pub fn deliver_media_thumbnail(&mut self, event: &MediaThumbnailEvent) {
        if let Some(listener) = &mut self.media_thumbnail {
            trace!("delivering media thumbnail");
            listener(event);
        }
    }

    /// Delivers a playback state change.
    pub fn deliver_media_playback(&mut self, event: &MediaPlaybackEvent) {
        if let Some(listener) = &mut self.media_playback {
            trace!(state = ?event.state, "delivering media playback");
            listener(event);
        }
    }

    /// Delivers a timeline position.
    ///
    /// The binding layer checks the `position <= duration` contract here.
    /// An inconsistent event is clamped rather than dropped, so scripts
    /// written against sloppy media players still get something usable.
    pub fn deliver_media_timeline(&mut self, event: &MediaTimelineEvent) {
        if let Some(listener) = &mut self.media_timeline {
            let event = if event.is_consistent() {
                *event
            } else {
                warn!(
                    position = event.position,
                    duration = event.duration,
                    "inconsistent media timeline, clamping position"
                );
                clamp_timeline(event)
            };
            trace!(position = event.position, duration = event.duration, "delivering media timeline");
            listener(&event);
        }
    }

    /// Fulfills an outstanding random-file request for `property_name`.
    /// No-op when the script never asked for that property.
    pub fn deliver_random_file(&mut self, property_name: &str, file_path: &str) {
        if let Some(listener) = self.random_file.get_mut(property_name) {
            trace!(property = %property_name, path = %file_path, "delivering random file");
            listener(property_name, file_path);
        }
    }

    // ================================================================
    // Introspection
    // ================================================================

    #[must_use]
    pub fn has_audio_listener(&self) -> bool {
        self.audio.is_some()
    }

    #[must_use]
    pub fn has_media_listeners(&self) -> bool {
        self.media_status.is_some()
            || self.media_properties.is_some()
            || self.media_thumbnail.is_some()
            || self.media_playback.is_some()
            || self.media_timeline.is_some()
    }

    /// Property names with an outstanding random-file request.
    pub fn pending_random_file_properties(&self) -> impl Iterator<Item = &str> {
        self.random_file.keys().map(String::as_str)
    }
}

/// Forces a timeline event into contract shape: non-finite or negative
/// fields become zero, then position is clamped to duration.
fn clamp_timeline(event: &MediaTimelineEvent) -> MediaTimelineEvent {
    let sanitize = |v: f64| if v.is_finite() && v >= 0.0 { v } else { 0.0 };
    let duration = sanitize(event.duration);
    MediaTimelineEvent {
        position: sanitize(event.position).min(duration),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_position_back_to_duration() {
        let clamped = clamp_timeline(&MediaTimelineEvent {
            position: 200.0,
            duration: 180.0,
        });
        assert_eq!(clamped.position, 180.0);
        assert_eq!(clamped.duration, 180.0);
        assert!(clamped.is_consistent());
    }

    #[test]
    fn clamp_zeroes_non_finite_fields() {
        let clamped = clamp_timeline(&MediaTimelineEvent {
            position: f64::NAN,
            duration: f64::INFINITY,
        });
        assert_eq!(clamped.position, 0.0);
        assert_eq!(clamped.duration, 0.0);
        assert!(clamped.is_consistent());
    }

    #[test]
    fn clamp_zeroes_negative_fields() {
        let clamped = clamp_timeline(&MediaTimelineEvent {
            position: -5.0,
            duration: -1.0,
        });
        assert_eq!(clamped.position, 0.0);
        assert_eq!(clamped.duration, 0.0);
    }
}
