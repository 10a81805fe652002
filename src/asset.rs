//! Asset records and the builder that populates them from essence files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::{DcpError, Result};
use crate::essence::{EssenceProbe, EssenceType, TrackClass};
use crate::namespace::SpecVariant;
use crate::package::PackageConfig;

/// A single media track file placed into a reel slot.
///
/// Owned exclusively by the slot it is attached to; assets are never
/// shared between reels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Path of the essence file.
    pub filename: PathBuf,
    /// Display annotation (file basename).
    pub annotation: String,
    /// File size in bytes.
    pub size: u64,
    /// Encoding of the essence stream.
    pub essence_type: EssenceType,
    /// Specification variant the essence was mastered against.
    pub namespace: SpecVariant,
    /// Duration in frames.
    pub duration: u32,
    /// Entry point in frames.
    pub entry_point: u32,
    /// Aspect ratio, probed or forced by the package configuration.
    pub aspect_ratio: Option<String>,
    /// Content digest. Computed by a downstream signer, never here.
    pub digest: Option<String>,
}

impl Asset {
    /// Track class derived from the essence type.
    pub fn track_class(&self) -> TrackClass {
        self.essence_type.track_class()
    }
}

/// Builds [`Asset`] records from essence files under a package's
/// override policy.
pub struct AssetBuilder<'a> {
    config: &'a PackageConfig,
    probe: &'a dyn EssenceProbe,
}

impl<'a> AssetBuilder<'a> {
    /// Create a builder over the given configuration and probe.
    pub fn new(config: &'a PackageConfig, probe: &'a dyn EssenceProbe) -> Self {
        AssetBuilder { config, probe }
    }

    /// Build an asset record for the essence file at `path`.
    ///
    /// Steps run in order, each a precondition for the next: the open
    /// check, filesystem metadata, the essence probe, then the override
    /// policy. A file that cannot be opened fails before any probe is
    /// attempted.
    pub fn build(&self, path: &Path) -> Result<Asset> {
        info!("adding asset {}", path.display());

        fs::File::open(path).map_err(|source| {
            error!("could not open file: {}", path.display());
            DcpError::FileOpen {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let metadata = fs::metadata(path).map_err(|source| DcpError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let annotation = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("reading {} asset information", path.display());

        let info = self.probe.probe(path).map_err(|_| {
            error!("{} is not a proper essence file", path.display());
            DcpError::InvalidTrackType {
                path: path.to_path_buf(),
            }
        })?;

        let mut asset = Asset {
            filename: path.to_path_buf(),
            annotation,
            size: metadata.len(),
            essence_type: info.essence_type,
            namespace: info.namespace,
            duration: info.duration,
            entry_point: 0,
            aspect_ratio: info.aspect_ratio,
            digest: None,
        };

        // Forced aspect ratio replaces the probed value unconditionally.
        if let Some(ratio) = &self.config.aspect_ratio {
            asset.aspect_ratio = Some(ratio.clone());
        }

        // Forced duration and entry point are clamped to the probed
        // duration; out-of-range overrides are ignored with a warning.
        if let Some(duration) = self.config.duration {
            if duration < asset.duration {
                asset.duration = duration;
            } else {
                warn!(
                    "desired duration {} cannot be greater than asset duration {}, ignoring value",
                    duration, asset.duration
                );
            }
        }

        if let Some(entry_point) = self.config.entry_point {
            if entry_point < asset.duration {
                asset.entry_point = entry_point;
            } else {
                warn!(
                    "desired entry point {} cannot be greater than asset duration {}, ignoring value",
                    entry_point, asset.duration
                );
            }
        }

        Ok(asset)
    }
}
