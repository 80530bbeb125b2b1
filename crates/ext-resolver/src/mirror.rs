//! Download-URL rewriting for mirrored release hosting.

/// Where selected releases are downloaded from.
///
/// When a mirror endpoint is configured and the caller has not pointed the
/// resolver at an explicit index of their own, the selected release's
/// download URL is rewritten to `<endpoint>/<filename>`. With no endpoint,
/// or with a caller-supplied index, URLs pass through untouched.
///
/// This is a pure string rewrite applied after selection; it never
/// participates in filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorPolicy {
    endpoint: Option<String>,
    index_overridden: bool,
}

impl MirrorPolicy {
    /// Policy with no mirror configured.
    pub fn passthrough() -> Self {
        Self::default()
    }

    /// Policy for a configured mirror endpoint.
    ///
    /// `index_overridden` records whether the caller supplied its own index
    /// location; a mirror never applies to someone else's index.
    pub fn new(endpoint: Option<String>, index_overridden: bool) -> Self {
        Self {
            endpoint,
            index_overridden,
        }
    }

    /// Rewrite `download_url` for the wheel named `filename`.
    pub fn rewrite(&self, filename: &str, download_url: &str) -> String {
        match &self.endpoint {
            Some(endpoint) if !self.index_overridden => {
                format!("{}/{}", endpoint.trim_end_matches('/'), filename)
            }
            _ => download_url.to_string(),
        }
    }
}
