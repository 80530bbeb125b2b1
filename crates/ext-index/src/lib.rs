//! The published extension index contract.
//!
//! This crate models the catalog that an extension-enabled CLI consults to
//! discover installable plugin releases: a JSON document mapping extension
//! names to ordered lists of release descriptors, each pointing at a Python
//! wheel. Parsing follows the index service contract exactly; selection logic
//! lives in the `ext-resolver` crate.

pub mod descriptor;
pub mod document;
pub mod error;
pub mod version;
pub mod wheel;

pub use descriptor::{ReleaseDescriptor, ReleaseMetadata};
pub use document::IndexDocument;
pub use error::Error;
pub use wheel::WheelTags;
