//! Reels: track slot attachment and validation.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::asset::Asset;
use crate::error::{DcpError, Result};
use crate::essence::TrackClass;
use crate::namespace::SpecVariant;

/// One timed segment of a presentation, holding at most one picture,
/// one sound, and one timed-text track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    /// Generated reel identifier.
    pub uuid: String,
    /// Annotation inherited from the package.
    pub annotation: String,
    /// Main picture track.
    pub main_picture: Option<Asset>,
    /// Main sound track.
    pub main_sound: Option<Asset>,
    /// Main subtitle (timed-text) track.
    pub main_subtitle: Option<Asset>,
}

impl Reel {
    /// Create an empty reel with a fresh identifier.
    pub fn new(annotation: impl Into<String>) -> Self {
        Reel {
            uuid: Uuid::new_v4().to_string(),
            annotation: annotation.into(),
            main_picture: None,
            main_sound: None,
            main_subtitle: None,
        }
    }

    /// Attach `asset` to the slot its track class selects.
    ///
    /// The first asset attached anywhere in a package commits
    /// `package_ns`, the package-wide specification variant; every
    /// subsequent asset must match it. The commitment is one-way and
    /// survives a later failed attach. A class whose slot is already
    /// occupied is rejected; the reel is left unmodified on any error.
    pub fn attach(&mut self, package_ns: &mut SpecVariant, asset: Asset) -> Result<()> {
        info!("adding asset to reel");

        if *package_ns == SpecVariant::Unknown {
            *package_ns = asset.namespace;
            debug!("label type detected: {}", package_ns);
        } else if *package_ns != asset.namespace {
            error!(
                "specification mismatch in assets, make sure all assets are MXF Interop or SMPTE"
            );
            return Err(DcpError::SpecificationMismatch);
        }

        let class = asset.track_class();
        let slot = match class {
            TrackClass::Picture => &mut self.main_picture,
            TrackClass::Sound => &mut self.main_sound,
            TrackClass::TimedText => &mut self.main_subtitle,
            TrackClass::Unknown => return Err(DcpError::UnknownTrackClass),
        };

        if slot.is_some() {
            return Err(DcpError::DuplicateTrack(class));
        }

        debug!("adding {} track", class);
        *slot = Some(asset);
        Ok(())
    }

    /// Validate a fully-assembled reel.
    ///
    /// `reel_index` is zero-based; reported reel numbers are 1-based.
    /// Checks run in priority order: picture presence, specification
    /// agreement across present tracks, then duration reconciliation.
    /// Reconciliation adjusts every present track to the shortest
    /// duration and never fails.
    pub fn validate(&mut self, reel_index: usize) -> Result<()> {
        let reel_number = reel_index + 1;

        debug!("validating reel {}", reel_number);

        let picture = match &self.main_picture {
            Some(picture) => picture,
            None => {
                error!("reel {} has no picture track", reel_number);
                return Err(DcpError::NoPictureTrack { reel: reel_number });
            }
        };

        // Specification agreement. Tracks with zero duration are not
        // actually present and are exempt.
        for track in [&self.main_sound, &self.main_subtitle].into_iter().flatten() {
            if track.duration > 0 && track.namespace != picture.namespace {
                error!(
                    "specification mismatch in assets, make sure all assets are MXF Interop or SMPTE"
                );
                return Err(DcpError::SpecificationMismatch);
            }
        }

        // Ordered min-reduction over picture, sound, subtitle. The order
        // fixes the final value under three-way mismatches.
        let mut duration = picture.duration;
        let mut mismatch = false;

        if let Some(sound) = &self.main_sound {
            if sound.duration > 0 && sound.duration != duration {
                mismatch = true;
                duration = duration.min(sound.duration);
            }
        }

        if let Some(subtitle) = &self.main_subtitle {
            if subtitle.duration > 0 && subtitle.duration != duration {
                mismatch = true;
                duration = duration.min(subtitle.duration);
            }
        }

        if mismatch {
            for track in [
                &mut self.main_picture,
                &mut self.main_sound,
                &mut self.main_subtitle,
            ]
            .into_iter()
            .flatten()
            {
                track.duration = duration;
            }

            warn!(
                "reel {}: asset duration mismatch, adjusting all durations to shortest asset duration of {} frames",
                reel_number, duration
            );
        }

        Ok(())
    }
}
