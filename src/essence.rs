//! Essence encoding types, track classification, and the probe seam.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::namespace::SpecVariant;

/// Raw essence encoding of a media file, as reported by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EssenceType {
    /// Unrecognized encoding.
    #[default]
    Unknown,
    /// MPEG-2 video elementary stream.
    Mpeg2Ves,
    /// JPEG 2000 picture essence.
    Jpeg2000,
    /// Stereoscopic JPEG 2000 picture essence.
    Jpeg2000Stereo,
    /// 24-bit 48 kHz PCM sound essence.
    Pcm24b48k,
    /// 24-bit 96 kHz PCM sound essence.
    Pcm24b96k,
    /// Timed-text (subtitle or caption) essence.
    TimedText,
}

impl EssenceType {
    /// Classify this encoding into a reel track class.
    ///
    /// Total over the closed encoding table: unrecognized encodings
    /// degrade to [`TrackClass::Unknown`] rather than erroring. Callers
    /// that receive `Unknown` must treat it as a hard rejection.
    pub fn track_class(&self) -> TrackClass {
        match self {
            EssenceType::Mpeg2Ves | EssenceType::Jpeg2000 | EssenceType::Jpeg2000Stereo => {
                TrackClass::Picture
            }
            EssenceType::Pcm24b48k | EssenceType::Pcm24b96k => TrackClass::Sound,
            EssenceType::TimedText => TrackClass::TimedText,
            EssenceType::Unknown => TrackClass::Unknown,
        }
    }
}

/// Semantic category of a track within a reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrackClass {
    /// Picture (video) track.
    Picture,
    /// Sound (audio) track.
    Sound,
    /// Timed-text (subtitle/caption) track.
    TimedText,
    /// Not classifiable into a reel slot.
    #[default]
    Unknown,
}

impl From<EssenceType> for TrackClass {
    fn from(essence: EssenceType) -> Self {
        essence.track_class()
    }
}

impl fmt::Display for TrackClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackClass::Picture => write!(f, "picture"),
            TrackClass::Sound => write!(f, "sound"),
            TrackClass::TimedText => write!(f, "timed text"),
            TrackClass::Unknown => write!(f, "unknown"),
        }
    }
}

/// Metadata a probe reads out of an essence file's headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssenceInfo {
    /// Encoding of the essence stream.
    pub essence_type: EssenceType,
    /// Specification variant the essence was mastered against.
    pub namespace: SpecVariant,
    /// Duration in frames.
    pub duration: u32,
    /// Aspect ratio, when the container carries one.
    pub aspect_ratio: Option<String>,
}

/// Reads essence metadata out of a media file.
///
/// Implementations parse container and codec headers; the assembly core
/// only consumes the result. A probe fails when the file is not a
/// recognized essence track.
pub trait EssenceProbe {
    /// Probe the file at `path`.
    fn probe(&self, path: &Path) -> Result<EssenceInfo>;
}
