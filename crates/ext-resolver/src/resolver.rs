//! Release candidate resolution.
//!
//! Given an extension name and the published index, selects the single
//! release to install or upgrade to. Resolution is a fixed filter pipeline:
//! universal wheels only, then the requested version window, then host
//! compatibility, then newest-wins. The first filter to run dry stops
//! resolution with a message naming what went wrong.
//!
//! Each call is a pure in-memory computation over the supplied index; the
//! same request and index always produce the same result.

use ext_index::{IndexDocument, ReleaseDescriptor, version, wheel};
use semver::Version;
use tracing::debug;

use crate::compat::CompatibilityProbe;
use crate::error::{Error, Result};
use crate::mirror::MirrorPolicy;
use crate::stage::{EmptyMessage, Stage, run_pipeline};

/// What a caller asks the resolver for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Extension name to resolve.
    pub name: String,
    /// Version currently installed, when upgrading. Absent means any
    /// published version is an upgrade.
    pub current_version: Option<String>,
    /// Exact version to select instead of the newest.
    pub target_version: Option<String>,
}

impl ResolutionRequest {
    /// Request the newest installable release of `name`.
    pub fn latest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Request an upgrade from the currently installed `current` version.
    pub fn upgrade_from(name: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_version: Some(current.into()),
            target_version: None,
        }
    }

    /// Request exactly version `target`.
    pub fn pinned(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_version: None,
            target_version: Some(target.into()),
        }
    }
}

/// The release selected by a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    /// Where to download the wheel from, after any mirror rewrite.
    pub download_url: String,
    /// Digest published for the wheel, when the index carries one.
    pub sha256_digest: Option<String>,
}

/// Selects the single release to install for a given request.
pub struct Resolver<P> {
    probe: P,
    mirror: MirrorPolicy,
}

impl<P: CompatibilityProbe> Resolver<P> {
    /// Resolver using `probe` for host-compatibility checks and no mirror.
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            mirror: MirrorPolicy::passthrough(),
        }
    }

    /// Replace the mirror policy applied to selected download URLs.
    pub fn with_mirror(mut self, mirror: MirrorPolicy) -> Self {
        self.mirror = mirror;
        self
    }

    /// Resolve `request` against `index`.
    ///
    /// Fails with [`Error::NoCandidates`] when the extension is unknown or
    /// when any filter eliminates every remaining candidate; the message
    /// names the reason. A malformed `target_version` or `current_version`
    /// fails with the underlying version-parse error instead, since that is
    /// a caller mistake rather than a resolution outcome.
    pub fn resolve(
        &self,
        request: &ResolutionRequest,
        index: &IndexDocument,
    ) -> Result<ResolvedRelease> {
        let name = request.name.as_str();
        let candidates = index
            .get(name)
            .filter(|releases| !releases.is_empty())
            .ok_or_else(|| {
                Error::no_candidates(format!("No extension found with name '{name}'"))
            })?
            .to_vec();

        // Parse request versions up front so a malformed argument surfaces
        // as a version error, not as an empty candidate list.
        let target = request
            .target_version
            .as_deref()
            .map(|raw| Ok::<_, Error>((raw, version::parse_loose(raw)?)))
            .transpose()?;
        let current = request
            .current_version
            .as_deref()
            .map(version::parse_loose)
            .transpose()?;

        let stages = self.stages(name, target, current);
        let survivors = run_pipeline(stages, candidates)?;

        let chosen = pick_latest(&survivors).ok_or_else(|| {
            Error::no_candidates(format!("No suitable extensions found for '{name}'."))
        })?;
        debug!(name, version = %chosen.metadata.version, "resolved release");

        Ok(ResolvedRelease {
            download_url: self.mirror.rewrite(&chosen.filename, &chosen.download_url),
            sha256_digest: chosen.sha256_digest.clone(),
        })
    }

    /// Assemble the filter stages for one request, in their fixed order.
    fn stages<'a>(
        &'a self,
        name: &'a str,
        target: Option<(&'a str, Version)>,
        current: Option<Version>,
    ) -> Vec<Stage<'a>> {
        let mut stages = Vec::with_capacity(3);

        stages.push(Stage {
            name: "universal-wheel",
            keep: Box::new(move |candidate: &ReleaseDescriptor| {
                let universal = wheel::is_universal(&candidate.filename);
                if !universal {
                    debug!(
                        filename = %candidate.filename,
                        "skipping release: not a universal wheel"
                    );
                }
                universal
            }),
            on_empty: EmptyMessage::Static(format!(
                "No suitable extensions found for '{name}'."
            )),
        });

        // Exactly one version-selection branch runs. With neither a target
        // nor an installed version, everything published is in the window.
        if let Some((raw_target, parsed_target)) = target {
            stages.push(Stage {
                name: "requested-version",
                keep: Box::new(move |candidate| {
                    matches_parsed_version(candidate, |v| *v == parsed_target)
                }),
                on_empty: EmptyMessage::Static(format!(
                    "Version '{raw_target}' not found for extension '{name}'"
                )),
            });
        } else if let Some(installed) = current {
            stages.push(Stage {
                name: "newer-than-installed",
                keep: Box::new(move |candidate| {
                    matches_parsed_version(candidate, |v| *v > installed)
                }),
                on_empty: EmptyMessage::Static(format!(
                    "Latest version of '{name}' is already installed."
                )),
            });
        }

        stages.push(Stage {
            name: "host-compatibility",
            keep: Box::new(move |candidate| {
                let report = self.probe.check(candidate);
                if !report.compatible {
                    debug!(
                        filename = %candidate.filename,
                        "skipping release: incompatible with host"
                    );
                }
                report.compatible
            }),
            // When every candidate is incompatible, explain using the newest
            // release the filter rejected.
            on_empty: EmptyMessage::Deferred(Box::new(move |entered: &[ReleaseDescriptor]| {
                match pick_latest(entered) {
                    Some(best) => self.probe.check(best).diagnostic(name),
                    None => format!("No suitable extensions found for '{name}'."),
                }
            })),
        });

        stages
    }
}

/// Apply `accept` to a candidate's parsed version; candidates whose declared
/// version does not parse are dropped (logged).
fn matches_parsed_version(
    candidate: &ReleaseDescriptor,
    accept: impl Fn(&Version) -> bool,
) -> bool {
    match candidate.parsed_version() {
        Ok(v) => accept(&v),
        Err(_) => {
            debug!(
                filename = %candidate.filename,
                version = %candidate.metadata.version,
                "skipping release: unparsable version"
            );
            false
        }
    }
}

/// Newest release by parsed version.
///
/// On a version tie the earliest candidate in index order wins; the index
/// does not promise a stable secondary ordering, so ties are resolved by
/// position only. Releases whose declared version does not parse are ignored.
pub(crate) fn pick_latest(candidates: &[ReleaseDescriptor]) -> Option<&ReleaseDescriptor> {
    let mut best: Option<(&ReleaseDescriptor, Version)> = None;

    for candidate in candidates {
        let Ok(parsed) = candidate.parsed_version() else {
            debug!(
                filename = %candidate.filename,
                version = %candidate.metadata.version,
                "ignoring release with unparsable version"
            );
            continue;
        };
        match &best {
            Some((_, best_version)) if parsed <= *best_version => {}
            _ => best = Some((candidate, parsed)),
        }
    }

    best.map(|(candidate, _)| candidate)
}
