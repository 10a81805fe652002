//! Specification variants and their XML namespace sets.
//!
//! Digital cinema packages exist in two mutually-exclusive flavors: the
//! early MXF Interop profile and the later SMPTE profile. Each flavor
//! carries its own set of XML namespaces for the documents a downstream
//! serializer emits; the variant an asset was mastered against is
//! detected by the essence probe and must be uniform across a package.

use std::fmt;

use serde::{Deserialize, Serialize};

/// XML declaration emitted at the top of every package document.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>";

/// XML digital signature namespace.
pub const DSIG_NS: &str = "http://www.w3.org/2000/09/xmldsig#";

/// Canonicalization method for signed documents.
pub const C14N_METHOD: &str = "http://www.w3.org/TR/2001/REC-xml-c14n-20010315";

/// Digest method for signed documents.
pub const DIGEST_METHOD: &str = "http://www.w3.org/2000/09/xmldsig#sha1";

/// Transform method for enveloped signatures.
pub const TRANSFORM_METHOD: &str = "http://www.w3.org/2000/09/xmldsig#enveloped-signature";

/// Recognized content rating agencies.
pub const RATING_AGENCIES: [&str; 2] = [
    "http://www.mpaa.org/2003-ratings",
    "http://rcq.qc.ca/2003-ratings",
];

/// Specification variant of an asset or a whole package.
///
/// `Unknown` is the pre-commitment state of a package build session; the
/// first attached asset decides the variant for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecVariant {
    /// No variant committed yet.
    #[default]
    Unknown,
    /// MXF Interop (pre-standard) profile.
    Interop,
    /// SMPTE 429 profile.
    Smpte,
}

impl SpecVariant {
    /// Composition playlist namespace for this variant.
    pub fn cpl_namespace(&self) -> Option<&'static str> {
        match self {
            SpecVariant::Unknown => None,
            SpecVariant::Interop => Some("http://www.digicine.com/PROTO-ASDCP-CPL-20040511#"),
            SpecVariant::Smpte => Some("http://www.smpte-ra.org/schemas/429-7/2006/CPL"),
        }
    }

    /// Stereoscopic composition playlist namespace for this variant.
    pub fn cpl_3d_namespace(&self) -> Option<&'static str> {
        match self {
            SpecVariant::Unknown => None,
            SpecVariant::Interop => {
                Some("http://www.digicine.com/schemas/437-Y/2007/Main-Stereo-Picture-CPL")
            }
            SpecVariant::Smpte => {
                Some("http://www.smpte-ra.org/schemas/429-10/2008/Main-Stereo-Picture-CPL")
            }
        }
    }

    /// Packing list namespace for this variant.
    pub fn pkl_namespace(&self) -> Option<&'static str> {
        match self {
            SpecVariant::Unknown => None,
            SpecVariant::Interop => Some("http://www.digicine.com/PROTO-ASDCP-PKL-20040311#"),
            SpecVariant::Smpte => Some("http://www.smpte-ra.org/schemas/429-8/2007/PKL"),
        }
    }

    /// Asset map namespace for this variant.
    pub fn assetmap_namespace(&self) -> Option<&'static str> {
        match self {
            SpecVariant::Unknown => None,
            SpecVariant::Interop => Some("http://www.digicine.com/PROTO-ASDCP-AM-20040311#"),
            SpecVariant::Smpte => Some("http://www.smpte-ra.org/schemas/429-9/2007/AM"),
        }
    }

    /// Signature method URI used when documents of this variant are signed.
    pub fn signature_method(&self) -> Option<&'static str> {
        match self {
            SpecVariant::Unknown => None,
            SpecVariant::Interop => Some("http://www.w3.org/2000/09/xmldsig#rsa-sha1"),
            SpecVariant::Smpte => Some("http://www.w3.org/2001/04/xmldsig-more#rsa-sha256"),
        }
    }
}

impl fmt::Display for SpecVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecVariant::Unknown => write!(f, "unknown"),
            SpecVariant::Interop => write!(f, "MXF Interop"),
            SpecVariant::Smpte => write!(f, "SMPTE"),
        }
    }
}
