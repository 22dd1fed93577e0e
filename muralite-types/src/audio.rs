//! Audio level frames.
//!
//! The host samples system audio and pushes volume levels to the script on
//! a cadence it alone controls — a script cannot request a sample rate, only
//! register a listener and take what arrives.

use crate::Error;
use serde::{Deserialize, Serialize};

/// Spectrum buckets per stereo channel in one frame.
pub const BUCKETS_PER_CHANNEL: usize = 64;

/// Total byte length of one audio frame: left channel buckets followed by
/// right channel buckets.
pub const FRAME_LEN: usize = BUCKETS_PER_CHANNEL * 2;

/// One frame of audio volume levels.
///
/// 128 bytes, laid out as 64 left-channel buckets followed by 64
/// right-channel buckets, each bucket a linear volume level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct AudioFrame {
    levels: Vec<u8>,
}

impl AudioFrame {
    /// Creates a frame from raw level bytes.
    ///
    /// # Errors
    /// Returns [`Error::BadAudioFrameLen`] when `levels` is not exactly
    /// [`FRAME_LEN`] bytes.
    pub fn new(levels: Vec<u8>) -> crate::Result<Self> {
        if levels.len() != FRAME_LEN {
            return Err(Error::BadAudioFrameLen(levels.len()));
        }
        Ok(Self { levels })
    }

    /// A frame of silence.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            levels: vec![0; FRAME_LEN],
        }
    }

    /// All level bytes, left channel first.
    #[must_use]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Left channel buckets.
    #[must_use]
    pub fn left(&self) -> &[u8] {
        &self.levels[..BUCKETS_PER_CHANNEL]
    }

    /// Right channel buckets.
    #[must_use]
    pub fn right(&self) -> &[u8] {
        &self.levels[BUCKETS_PER_CHANNEL..]
    }

    /// Peak level across both channels.
    #[must_use]
    pub fn peak(&self) -> u8 {
        self.levels.iter().copied().max().unwrap_or(0)
    }
}

impl TryFrom<Vec<u8>> for AudioFrame {
    type Error = Error;

    fn try_from(levels: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl From<AudioFrame> for Vec<u8> {
    fn from(frame: AudioFrame) -> Self {
        frame.levels
    }
}

impl AsRef<[u8]> for AudioFrame {
    fn as_ref(&self) -> &[u8] {
        &self.levels
    }
}
