//! Resolver settings from the user's `resolver.toml`.
//!
//! ```toml
//! [index]
//! url = "https://example.com/my-index.json"
//!
//! [mirror]
//! endpoint = "https://mirror.example.com/wheels"
//! ```
//!
//! A missing file means defaults (no index override, no mirror). Index
//! fetching itself happens elsewhere; this module only records where the
//! caller pointed and derives the [`MirrorPolicy`] from it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mirror::MirrorPolicy;

/// Persistent resolver settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Index location settings.
    #[serde(default)]
    pub index: IndexSettings,
    /// Mirror settings.
    #[serde(default)]
    pub mirror: MirrorSettings,
}

/// `[index]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IndexSettings {
    /// Explicit index URL, set when the user points at an index of their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `[mirror]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MirrorSettings {
    /// Alternate download endpoint for selected wheels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Settings {
    /// Load settings from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default settings location: `<user config dir>/extensions/resolver.toml`.
    ///
    /// `None` when the platform reports no config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("extensions").join("resolver.toml"))
    }

    /// The mirror policy these settings imply: the mirror endpoint applies
    /// only when no explicit index URL is configured.
    pub fn mirror_policy(&self) -> MirrorPolicy {
        MirrorPolicy::new(self.mirror.endpoint.clone(), self.index.url.is_some())
    }
}
