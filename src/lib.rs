//! Digital Cinema Package assembly
//!
//! This crate builds and validates the in-memory structural model of a
//! Digital Cinema Package (DCP): the Package → Packaging List → Content
//! Playlist → Reel → Asset hierarchy used to distribute theatrical
//! content.
//!
//! # Features
//!
//! - Essence classification into picture, sound, and timed-text tracks
//! - Asset record construction with package-level override policy
//! - Reel assembly under single-slot and namespace-agreement rules
//! - Reel validation with duration reconciliation across tracks
//! - CPL / PKL / package aggregation with generated identifiers and
//!   filenames
//! - MXF Interop and SMPTE namespace tables for downstream serializers
//!
//! Essence probing (reading container headers), XML emission, and
//! signing are external collaborators: probing enters through the
//! [`EssenceProbe`] trait, and serializers consume the validated tree.
//!
//! # Example
//!
//! ```no_run
//! use dcp_assembly::{EssenceProbe, Package, PackageConfig};
//! use std::path::Path;
//!
//! fn build(probe: &dyn EssenceProbe) -> dcp_assembly::Result<Package> {
//!     let mut package = Package::new(PackageConfig::default());
//!
//!     let picture = package.build_asset(Path::new("feature_v.mxf"), probe)?;
//!     let sound = package.build_asset(Path::new("feature_a.mxf"), probe)?;
//!
//!     let mut reel = package.new_reel();
//!     package.add_asset_to_reel(&mut reel, picture)?;
//!     package.add_asset_to_reel(&mut reel, sound)?;
//!     reel.validate(0)?;
//!
//!     let mut cpl = package.new_cpl();
//!     cpl.add_reel(reel);
//!
//!     let mut pkl = package.new_pkl();
//!     pkl.add_cpl(cpl);
//!     package.add_pkl(pkl);
//!
//!     Ok(package)
//! }
//! ```

mod asset;
mod error;
mod essence;
mod namespace;
mod package;
mod reel;

pub use asset::{Asset, AssetBuilder};
pub use error::{DcpError, Result};
pub use essence::{EssenceInfo, EssenceProbe, EssenceType, TrackClass};
pub use namespace::{
    SpecVariant, C14N_METHOD, DIGEST_METHOD, DSIG_NS, RATING_AGENCIES, TRANSFORM_METHOD,
    XML_HEADER,
};
pub use package::{ContentPlaylist, Package, PackageConfig, PackagingList, DEFAULT_KIND};
pub use reel::Reel;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
