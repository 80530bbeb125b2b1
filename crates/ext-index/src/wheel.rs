//! Wheel filename tag parsing.
//!
//! Extension releases are published as Python wheels whose filenames encode
//! build tags: `{distribution}-{version}[-{build}]-{python}-{abi}-{platform}.whl`.
//! The resolver only installs *universal* wheels (ABI tag `none`, platform tag
//! `any`); platform-specific builds are visible in the index but never
//! selected automatically.

use std::sync::LazyLock;

use regex::Regex;

static WHEEL_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<distribution>.+?)-(?P<version>\d[^-]*)(?:-(?P<build>\d[^-]*))?-(?P<python>[^-]+)-(?P<abi>[^-]+)-(?P<platform>[^-]+)\.whl$",
    )
    .unwrap()
});

/// Build tags parsed from a wheel filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelTags {
    /// Distribution name (e.g., `foo_extension`).
    pub distribution: String,
    /// Version component of the filename.
    pub version: String,
    /// Optional build tag (must start with a digit).
    pub build: Option<String>,
    /// Python tag (e.g., `py3`, `py2.py3`).
    pub python: String,
    /// ABI tag (`none` for pure-Python wheels).
    pub abi: String,
    /// Platform tag (`any` for platform-independent wheels).
    pub platform: String,
}

impl WheelTags {
    /// Parse build tags out of a wheel filename.
    ///
    /// Returns `None` for filenames that are not well-formed wheel names
    /// (wrong extension, missing tag segments).
    pub fn parse(filename: &str) -> Option<Self> {
        let caps = WHEEL_NAME_PATTERN.captures(filename)?;
        Some(Self {
            distribution: caps["distribution"].to_string(),
            version: caps["version"].to_string(),
            build: caps.name("build").map(|m| m.as_str().to_string()),
            python: caps["python"].to_string(),
            abi: caps["abi"].to_string(),
            platform: caps["platform"].to_string(),
        })
    }

    /// Whether this wheel runs on any platform and ABI.
    pub fn is_universal(&self) -> bool {
        self.abi == "none" && self.platform == "any"
    }
}

/// Whether `filename` names a universal wheel.
///
/// Filenames that do not parse as wheel names are never universal.
pub fn is_universal(filename: &str) -> bool {
    WheelTags::parse(filename).is_some_and(|tags| tags.is_universal())
}
