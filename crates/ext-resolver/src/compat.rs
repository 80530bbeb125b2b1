//! Host-compatibility checking for release candidates.
//!
//! A release may declare the lowest and highest host versions it supports.
//! The resolver consults a [`CompatibilityProbe`] rather than checking bounds
//! inline so callers can substitute their own policy (tests stub the probe to
//! force either verdict).

use ext_index::{ReleaseDescriptor, version};
use tracing::debug;

/// Outcome of probing one release for host compatibility.
///
/// Carries the verdict plus the fields needed to explain it: the release
/// version, the host version the check ran against, and the bounds the
/// release declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatReport {
    /// Whether the release can run on this host.
    pub compatible: bool,
    /// Version of the probed release, as declared in its metadata.
    pub release_version: String,
    /// Host version the check ran against.
    pub host_version: semver::Version,
    /// Declared lower bound, when the release declares one.
    pub min_required: Option<String>,
    /// Declared upper bound, when the release declares one.
    pub max_required: Option<String>,
}

impl CompatReport {
    /// Human-readable explanation of this verdict, surfaced when the
    /// compatibility filter eliminates every candidate.
    pub fn diagnostic(&self, extension: &str) -> String {
        if self.compatible {
            return format!(
                "Extension '{extension}' version {} is compatible with host version {}.",
                self.release_version, self.host_version
            );
        }

        let mut bounds = Vec::new();
        if let Some(min) = &self.min_required {
            bounds.push(format!("a host version of at least {min}"));
        }
        if let Some(max) = &self.max_required {
            bounds.push(format!("a host version of at most {max}"));
        }

        if bounds.is_empty() {
            format!(
                "Extension '{extension}' version {} is not compatible with host version {}.",
                self.release_version, self.host_version
            )
        } else {
            format!(
                "Extension '{extension}' version {} requires {}; host version is {}.",
                self.release_version,
                bounds.join(" and "),
                self.host_version
            )
        }
    }
}

/// Decides whether a release can run on the current host.
pub trait CompatibilityProbe {
    /// Probe one release for compatibility with the running host.
    fn check(&self, release: &ReleaseDescriptor) -> CompatReport;
}

/// Default probe: checks a release's declared min/max host bounds against a
/// fixed host version.
///
/// Undeclared bounds do not constrain. A declared bound that fails to parse
/// makes the release incompatible rather than silently waving it through.
#[derive(Debug, Clone)]
pub struct HostVersionProbe {
    host_version: semver::Version,
}

impl HostVersionProbe {
    /// Probe against the given host version.
    pub fn new(host_version: semver::Version) -> Self {
        Self { host_version }
    }

    /// Probe against a host version string (loose semver).
    pub fn from_host_str(host: &str) -> crate::error::Result<Self> {
        Ok(Self::new(version::parse_loose(host)?))
    }

    fn bound_satisfied(&self, declared: &str, lower: bool) -> bool {
        match version::parse_loose(declared) {
            Ok(bound) => {
                if lower {
                    self.host_version >= bound
                } else {
                    self.host_version <= bound
                }
            }
            Err(_) => {
                debug!(declared, "release declares unparsable host bound, treating as incompatible");
                false
            }
        }
    }
}

impl CompatibilityProbe for HostVersionProbe {
    fn check(&self, release: &ReleaseDescriptor) -> CompatReport {
        let meta = &release.metadata;
        let mut compatible = true;

        if let Some(min) = &meta.min_host_version {
            compatible &= self.bound_satisfied(min, true);
        }
        if let Some(max) = &meta.max_host_version {
            compatible &= self.bound_satisfied(max, false);
        }

        CompatReport {
            compatible,
            release_version: meta.version.clone(),
            host_version: self.host_version.clone(),
            min_required: meta.min_host_version.clone(),
            max_required: meta.max_host_version.clone(),
        }
    }
}
