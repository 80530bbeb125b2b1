//! Newest-first views of an extension's published releases.
//!
//! Listing does not filter: platform-specific and incompatible releases
//! appear alongside installable ones, each annotated with its stability
//! flags and a host-compatibility verdict. Selection rules live in
//! [`crate::resolver`].

use std::cmp::Ordering;

use ext_index::{IndexDocument, version};
use semver::Version;

use crate::compat::CompatibilityProbe;
use crate::error::{Error, Result};

/// One row in a release listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSummary {
    /// Declared release version, as published.
    pub version: String,
    /// Published as a preview.
    pub preview: bool,
    /// Published as experimental.
    pub experimental: bool,
    /// Whether the release can run on this host.
    pub compatible: bool,
}

/// List the releases published for `name`, newest first.
///
/// Releases whose declared version does not parse sort after all parsable
/// ones, in publication order. Unknown names fail the same way as
/// resolution's existence check.
pub fn available_releases<P: CompatibilityProbe>(
    name: &str,
    index: &IndexDocument,
    probe: &P,
) -> Result<Vec<ReleaseSummary>> {
    let releases = index
        .get(name)
        .filter(|releases| !releases.is_empty())
        .ok_or_else(|| Error::no_candidates(format!("No extension found with name '{name}'")))?;

    let mut rows: Vec<(Option<Version>, ReleaseSummary)> = releases
        .iter()
        .map(|release| {
            let parsed = version::parse_loose(&release.metadata.version).ok();
            let summary = ReleaseSummary {
                version: release.metadata.version.clone(),
                preview: release.metadata.preview,
                experimental: release.metadata.experimental,
                compatible: probe.check(release).compatible,
            };
            (parsed, summary)
        })
        .collect();

    // Stable sort: equal versions keep publication order.
    rows.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    Ok(rows.into_iter().map(|(_, summary)| summary).collect())
}
