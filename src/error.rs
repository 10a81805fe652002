//! Error types for package assembly.

use std::path::PathBuf;

use thiserror::Error;

use crate::essence::TrackClass;

/// Result type for package assembly operations.
pub type Result<T> = std::result::Result<T, DcpError>;

/// Errors that can occur while assembling or validating a package.
#[derive(Error, Debug)]
pub enum DcpError {
    /// Asset file could not be opened for reading.
    #[error("could not open asset file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a recognized essence track.
    #[error("{} is not a proper essence file", path.display())]
    InvalidTrackType { path: PathBuf },

    /// Reel has no picture track. Reel number is 1-based.
    #[error("reel {reel} has no picture track")]
    NoPictureTrack { reel: usize },

    /// Reel has more than one picture track. Reel number is 1-based.
    ///
    /// Cannot occur under the single-slot reel model; kept so callers
    /// mapping validation outcomes cover reels with multiple picture
    /// slots.
    #[error("reel {reel} has multiple picture tracks")]
    MultiplePictureTrack { reel: usize },

    /// Assets mix the MXF Interop and SMPTE specification variants.
    #[error("specification mismatch in assets, all assets must be MXF Interop or SMPTE")]
    SpecificationMismatch,

    /// Essence does not map to a picture, sound, or timed-text slot.
    #[error("essence type does not map to a known track class")]
    UnknownTrackClass,

    /// A reel slot of this class is already occupied.
    #[error("reel already has a {0} track")]
    DuplicateTrack(TrackClass),
}
