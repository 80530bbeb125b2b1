use std::path::PathBuf;

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving an extension release.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pipeline stage eliminated every remaining candidate.
    ///
    /// Every resolution failure shares this variant; the message explains
    /// which stage ran dry. Callers branch on the variant and display the
    /// message, never parse it.
    #[error("{message}")]
    NoCandidates { message: String },

    /// Failed to read the settings file.
    #[error("failed to read settings at {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the settings file.
    #[error("failed to parse settings at {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Index contract error (malformed document or version string).
    #[error(transparent)]
    Index(#[from] ext_index::Error),
}

impl Error {
    /// Build the failure for a stage that ran dry.
    pub(crate) fn no_candidates(message: impl Into<String>) -> Self {
        Self::NoCandidates {
            message: message.into(),
        }
    }
}
