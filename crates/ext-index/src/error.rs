/// Errors that can occur reading the published extension index.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Index document is malformed JSON or violates the index contract.
    #[error("failed to parse extension index: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid semver version string.
    #[error("invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
