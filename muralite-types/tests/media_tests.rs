use muralite_types::{
    Error, MediaContentType, MediaPlaybackEvent, MediaPlaybackState, MediaPropertiesEvent,
    MediaStatusEvent, MediaThumbnailEvent, MediaTimelineEvent,
};
use pretty_assertions::assert_eq;
use std::str::FromStr;

// ── MediaContentType ──────────────────────────────────────────────

#[test]
fn content_type_wire_strings() {
    assert_eq!(
        serde_json::to_string(&MediaContentType::Music).unwrap(),
        r#""music""#
    );
    assert_eq!(
        serde_json::to_string(&MediaContentType::Video).unwrap(),
        r#""video""#
    );
    assert_eq!(
        serde_json::to_string(&MediaContentType::Image).unwrap(),
        r#""image""#
    );
}

#[test]
fn content_type_from_str_roundtrip() {
    for ct in [
        MediaContentType::Music,
        MediaContentType::Video,
        MediaContentType::Image,
    ] {
        assert_eq!(MediaContentType::from_str(ct.as_str()).unwrap(), ct);
        assert_eq!(ct.to_string(), ct.as_str());
    }
}

#[test]
fn content_type_rejects_unknown() {
    let err = MediaContentType::from_str("podcast").unwrap_err();
    assert!(matches!(err, Error::InvalidContentType(s) if s == "podcast"));

    // Case matters on the wire.
    assert!(MediaContentType::from_str("Music").is_err());
    assert!(serde_json::from_str::<MediaContentType>(r#""audio""#).is_err());
}

// ── MediaPlaybackState ────────────────────────────────────────────

#[test]
fn playback_state_numeric_wire_values() {
    assert_eq!(
        serde_json::to_string(&MediaPlaybackState::Playing).unwrap(),
        "0"
    );
    assert_eq!(
        serde_json::to_string(&MediaPlaybackState::Paused).unwrap(),
        "1"
    );
    assert_eq!(
        serde_json::to_string(&MediaPlaybackState::Stopped).unwrap(),
        "2"
    );
}

#[test]
fn playback_state_deserialize_roundtrip() {
    for state in [
        MediaPlaybackState::Playing,
        MediaPlaybackState::Paused,
        MediaPlaybackState::Stopped,
    ] {
        let json = serde_json::to_string(&state).unwrap();
        let deser: MediaPlaybackState = serde_json::from_str(&json).unwrap();
        assert_eq!(deser, state);
    }
}

#[test]
fn playback_state_rejects_out_of_range() {
    let err = MediaPlaybackState::try_from(3).unwrap_err();
    assert!(matches!(err, Error::InvalidPlaybackState(3)));
    assert!(serde_json::from_str::<MediaPlaybackState>("7").is_err());
}

#[test]
fn playback_event_serde() {
    let event = MediaPlaybackEvent {
        state: MediaPlaybackState::Paused,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"state":1}"#);
    let deser: MediaPlaybackEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(deser, event);
}

// ── MediaStatusEvent ──────────────────────────────────────────────

#[test]
fn status_event_serde() {
    let on: MediaStatusEvent = serde_json::from_str(r#"{"enabled":true}"#).unwrap();
    assert!(on.enabled);
    let off: MediaStatusEvent = serde_json::from_str(r#"{"enabled":false}"#).unwrap();
    assert!(!off.enabled);
}

// ── MediaPropertiesEvent ──────────────────────────────────────────

#[test]
fn properties_event_wire_field_names() {
    let event = MediaPropertiesEvent {
        title: "Holding Pattern".into(),
        artist: "Night Drives".into(),
        sub_title: "Live".into(),
        album_title: "Afterglow".into(),
        album_artist: "Night Drives".into(),
        genres: "electronic".into(),
        content_type: MediaContentType::Music,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""subTitle":"Live""#));
    assert!(json.contains(r#""albumTitle":"Afterglow""#));
    assert!(json.contains(r#""albumArtist":"Night Drives""#));
    assert!(json.contains(r#""contentType":"music""#));

    let deser: MediaPropertiesEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(deser, event);
}

#[test]
fn properties_event_content_type_always_serialized() {
    // A sparse event still carries every contract field on the wire.
    let event = MediaPropertiesEvent {
        title: "t".into(),
        ..Default::default()
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""contentType":"music""#));
    assert!(json.contains(r#""albumTitle":"""#));
}

#[test]
fn properties_event_content_type_required_on_deserialize() {
    let json = r#"{
        "title": "t", "artist": "a", "subTitle": "",
        "albumTitle": "", "albumArtist": "", "genres": ""
    }"#;
    assert!(serde_json::from_str::<MediaPropertiesEvent>(json).is_err());
}

// ── MediaThumbnailEvent ───────────────────────────────────────────

#[test]
fn thumbnail_event_wire_field_names() {
    let event = MediaThumbnailEvent {
        thumbnail: "data:image/png;base64,iVBORw0KGgo=".into(),
        primary_color: "rgb(18,22,40)".into(),
        secondary_color: "rgb(90,110,170)".into(),
        tertiary_color: "rgb(200,180,120)".into(),
        text_color: "rgb(230,230,240)".into(),
        high_contrast_color: "rgb(255,255,255)".into(),
    };
    let json = serde_json::to_string(&event).unwrap();
    for field in [
        "primaryColor",
        "secondaryColor",
        "tertiaryColor",
        "textColor",
        "highContrastColor",
    ] {
        assert!(json.contains(field), "missing wire field {field}");
    }
    let deser: MediaThumbnailEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(deser, event);
}

// ── MediaTimelineEvent ────────────────────────────────────────────

#[test]
fn timeline_consistency() {
    let ok = MediaTimelineEvent {
        position: 42.5,
        duration: 180.0,
    };
    assert!(ok.is_consistent());

    let at_end = MediaTimelineEvent {
        position: 180.0,
        duration: 180.0,
    };
    assert!(at_end.is_consistent());

    let past_end = MediaTimelineEvent {
        position: 181.0,
        duration: 180.0,
    };
    assert!(!past_end.is_consistent());

    let negative = MediaTimelineEvent {
        position: -1.0,
        duration: 180.0,
    };
    assert!(!negative.is_consistent());

    let nan = MediaTimelineEvent {
        position: f64::NAN,
        duration: 180.0,
    };
    assert!(!nan.is_consistent());
}

#[test]
fn timeline_progress() {
    let half = MediaTimelineEvent {
        position: 90.0,
        duration: 180.0,
    };
    assert_eq!(half.progress(), Some(0.5));

    let zero_length = MediaTimelineEvent {
        position: 0.0,
        duration: 0.0,
    };
    assert!(zero_length.progress().is_none());

    let inconsistent = MediaTimelineEvent {
        position: 200.0,
        duration: 180.0,
    };
    assert!(inconsistent.progress().is_none());
}

#[test]
fn timeline_serde_roundtrip() {
    let event = MediaTimelineEvent {
        position: 12.25,
        duration: 301.5,
    };
    let json = serde_json::to_string(&event).unwrap();
    let deser: MediaTimelineEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(deser, event);
}
