//! Package-level aggregation: content playlists, packaging lists, and
//! the top-level package container.

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::asset::{Asset, AssetBuilder};
use crate::error::Result;
use crate::essence::EssenceProbe;
use crate::namespace::SpecVariant;
use crate::reel::Reel;

/// Default content kind when the caller does not set one.
pub const DEFAULT_KIND: &str = "feature";

fn tool_identifier() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn generate_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// `<PREFIX>_<basename-or-uuid>.xml`, matching the names theater
/// servers expect for playlist documents.
fn xml_filename(prefix: &str, basename: Option<&str>, uuid: &str) -> String {
    match basename {
        Some(base) if !base.is_empty() => format!("{}_{}.xml", prefix, base),
        _ => format!("{}_{}.xml", prefix, uuid),
    }
}

/// Package-wide metadata and override policy, fixed for one build
/// session and inherited by every record created under the package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Issuing organization.
    pub issuer: String,
    /// Creating tool.
    pub creator: String,
    /// Free-form annotation.
    pub annotation: String,
    /// Content title.
    pub title: String,
    /// Content kind (feature, trailer, advertisement, ...).
    pub kind: String,
    /// Content rating.
    pub rating: String,
    /// Base name for generated XML filenames; the generated identifier
    /// is used when unset.
    pub basename: Option<String>,
    /// Forced duration in frames, clamped to each asset's probed
    /// duration.
    pub duration: Option<u32>,
    /// Forced entry point in frames, clamped to each asset's duration.
    pub entry_point: Option<u32>,
    /// Forced aspect ratio, replacing any probed value.
    pub aspect_ratio: Option<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            issuer: tool_identifier(),
            creator: tool_identifier(),
            annotation: String::new(),
            title: String::new(),
            kind: DEFAULT_KIND.to_string(),
            rating: String::new(),
            basename: None,
            duration: None,
            entry_point: None,
            aspect_ratio: None,
        }
    }
}

/// An ordered sequence of reels forming one presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPlaylist {
    /// Generated playlist identifier.
    pub uuid: String,
    /// Annotation inherited from the package.
    pub annotation: String,
    /// Issuer inherited from the package.
    pub issuer: String,
    /// Creator inherited from the package.
    pub creator: String,
    /// Title inherited from the package.
    pub title: String,
    /// Content kind inherited from the package.
    pub kind: String,
    /// Rating inherited from the package.
    pub rating: String,
    /// Timestamp inherited from the package.
    pub timestamp: String,
    /// Generated XML filename (`CPL_*.xml`).
    pub filename: String,
    /// Reels, in presentation order.
    pub reels: Vec<Reel>,
}

impl ContentPlaylist {
    fn new(package: &Package) -> Self {
        let uuid = Uuid::new_v4().to_string();
        let filename = xml_filename("CPL", package.config.basename.as_deref(), &uuid);

        ContentPlaylist {
            uuid,
            annotation: package.config.annotation.clone(),
            issuer: package.config.issuer.clone(),
            creator: package.config.creator.clone(),
            title: package.config.title.clone(),
            kind: package.config.kind.clone(),
            rating: package.config.rating.clone(),
            timestamp: package.timestamp.clone(),
            filename,
            reels: Vec::new(),
        }
    }

    /// Append a reel, taking ownership.
    pub fn add_reel(&mut self, reel: Reel) {
        self.reels.push(reel);
    }

    /// Number of reels in the playlist.
    pub fn reel_count(&self) -> usize {
        self.reels.len()
    }
}

/// Inventory of content playlists within a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingList {
    /// Generated list identifier.
    pub uuid: String,
    /// Annotation inherited from the package.
    pub annotation: String,
    /// Issuer inherited from the package.
    pub issuer: String,
    /// Creator inherited from the package.
    pub creator: String,
    /// Timestamp inherited from the package.
    pub timestamp: String,
    /// Generated XML filename (`PKL_*.xml`).
    pub filename: String,
    /// Content playlists, in order.
    pub cpls: Vec<ContentPlaylist>,
}

impl PackagingList {
    fn new(package: &Package) -> Self {
        let uuid = Uuid::new_v4().to_string();
        let filename = xml_filename("PKL", package.config.basename.as_deref(), &uuid);

        PackagingList {
            uuid,
            annotation: package.config.annotation.clone(),
            issuer: package.config.issuer.clone(),
            creator: package.config.creator.clone(),
            timestamp: package.timestamp.clone(),
            filename,
            cpls: Vec::new(),
        }
    }

    /// Append a content playlist, taking ownership.
    pub fn add_cpl(&mut self, cpl: ContentPlaylist) {
        self.cpls.push(cpl);
    }

    /// Number of playlists in the list.
    pub fn cpl_count(&self) -> usize {
        self.cpls.len()
    }
}

/// The top-level distributable container and build session.
///
/// Holds the package-wide configuration and the specification variant
/// committed by the first attached asset. One package build per
/// execution context; nothing here is safe for concurrent mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Package-wide configuration.
    pub config: PackageConfig,
    /// Specification variant committed by the first attached asset.
    pub namespace: SpecVariant,
    /// Timestamp generated when the session started.
    pub timestamp: String,
    /// Packaging lists, in order.
    pub pkls: Vec<PackagingList>,
}

impl Package {
    /// Start a package build session.
    pub fn new(config: PackageConfig) -> Self {
        Package {
            config,
            namespace: SpecVariant::Unknown,
            timestamp: generate_timestamp(),
            pkls: Vec::new(),
        }
    }

    /// Build an asset record for `path` under this package's override
    /// policy.
    pub fn build_asset(&self, path: &Path, probe: &dyn EssenceProbe) -> Result<Asset> {
        AssetBuilder::new(&self.config, probe).build(path)
    }

    /// Attach an asset to a reel, committing or checking the
    /// package-wide specification variant.
    pub fn add_asset_to_reel(&mut self, reel: &mut Reel, asset: Asset) -> Result<()> {
        reel.attach(&mut self.namespace, asset)
    }

    /// Create an empty reel inheriting the package annotation.
    pub fn new_reel(&self) -> Reel {
        Reel::new(self.config.annotation.clone())
    }

    /// Create an empty content playlist inheriting package metadata.
    pub fn new_cpl(&self) -> ContentPlaylist {
        ContentPlaylist::new(self)
    }

    /// Create an empty packaging list inheriting package metadata.
    pub fn new_pkl(&self) -> PackagingList {
        PackagingList::new(self)
    }

    /// Append a packaging list, taking ownership.
    pub fn add_pkl(&mut self, pkl: PackagingList) {
        self.pkls.push(pkl);
    }

    /// Number of packaging lists in the package.
    pub fn pkl_count(&self) -> usize {
        self.pkls.len()
    }
}

impl Default for Package {
    fn default() -> Self {
        Package::new(PackageConfig::default())
    }
}
