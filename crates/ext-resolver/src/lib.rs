//! Release resolution for CLI extensions.
//!
//! Given the published extension index and a request (install latest, upgrade
//! from an installed version, or pin an exact version), this crate selects
//! the single release to download, or explains precisely why none qualifies.
//! Index parsing lives in `ext-index`; downloading and installing the
//! selected wheel are the caller's concern.

pub mod compat;
pub mod error;
pub mod listing;
pub mod mirror;
pub mod resolver;
pub mod settings;
mod stage;

pub use compat::{CompatReport, CompatibilityProbe, HostVersionProbe};
pub use error::{Error, Result};
pub use listing::{ReleaseSummary, available_releases};
pub use mirror::MirrorPolicy;
pub use resolver::{ResolutionRequest, ResolvedRelease, Resolver};
pub use settings::Settings;
