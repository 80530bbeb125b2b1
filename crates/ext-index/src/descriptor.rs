//! Release descriptors as published in the extension index.
//!
//! Wire field names (`downloadUrl`, `sha256Digest`, `isPreview`, ...) follow
//! the index service contract and are case-sensitive. Descriptors are
//! read-only once parsed; the resolver copies candidates between pipeline
//! stages instead of mutating them.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::version;

/// A single published release of an extension.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReleaseDescriptor {
    /// Wheel filename, e.g. `foo-1.0.0-py3-none-any.whl`.
    pub filename: String,
    /// Fully-qualified download location for the wheel.
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
    /// Hex SHA-256 digest of the wheel, when the index publishes one.
    #[serde(default, rename = "sha256Digest", skip_serializing_if = "Option::is_none")]
    pub sha256_digest: Option<String>,
    /// Release metadata: version, stability flags, host bounds.
    pub metadata: ReleaseMetadata,
}

impl ReleaseDescriptor {
    /// The release's declared version, parsed.
    pub fn parsed_version(&self) -> Result<semver::Version> {
        version::parse_loose(&self.metadata.version)
    }
}

/// Metadata block of a release descriptor.
///
/// The index publishes an open-ended metadata object; fields not modeled
/// here are ignored on parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReleaseMetadata {
    /// Declared release version (semver-like; see [`crate::version::parse_loose`]).
    pub version: String,
    /// One-line description of the extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Release is published as a preview.
    #[serde(default, rename = "isPreview")]
    pub preview: bool,
    /// Release is published as experimental.
    #[serde(default, rename = "isExperimental")]
    pub experimental: bool,
    /// Lowest host version this release supports, when declared.
    #[serde(default, rename = "minHostVersion", skip_serializing_if = "Option::is_none")]
    pub min_host_version: Option<String>,
    /// Highest host version this release supports, when declared.
    #[serde(default, rename = "maxHostVersion", skip_serializing_if = "Option::is_none")]
    pub max_host_version: Option<String>,
}
