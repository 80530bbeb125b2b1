//! The published index document: extension name to ordered releases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::ReleaseDescriptor;
use crate::error::Result;

/// Parsed index document.
///
/// The wire format is a JSON object keyed by extension name, each value an
/// array of release descriptors. Publication order within each array is
/// preserved; the resolver's tie-break depends on it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct IndexDocument {
    entries: BTreeMap<String, Vec<ReleaseDescriptor>>,
}

impl IndexDocument {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an index document from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an index document from raw JSON bytes.
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Releases published for `name`, in publication order.
    pub fn get(&self, name: &str) -> Option<&[ReleaseDescriptor]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Whether any release is published under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Publish a release under `name`, appending to its release list.
    pub fn publish(&mut self, name: impl Into<String>, release: ReleaseDescriptor) {
        self.entries.entry(name.into()).or_default().push(release);
    }

    /// All extension names in the index (sorted).
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of extensions in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no extensions at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
