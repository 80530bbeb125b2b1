//! Loose semver parsing for release and host version strings.
//!
//! The published index carries versions as plain strings. Most are full
//! `major.minor.patch` semver, but older releases ship two-part
//! `major.minor` versions; those are normalized by appending `.0`.
//!
//! # Examples
//!
//! ```
//! use ext_index::version::parse_loose;
//!
//! assert_eq!(parse_loose("1.2.3").unwrap(), semver::Version::new(1, 2, 3));
//! assert_eq!(parse_loose("1.2").unwrap(), semver::Version::new(1, 2, 0));
//! assert!(parse_loose("latest").is_err());
//! ```

use crate::error::{Error, Result};

/// Parse a version string, padding a missing patch component with `.0`.
///
/// - `"1.2.3"` -> `1.2.3`
/// - `"1.2"` -> `1.2.0`
/// - `"1"` -> error
pub fn parse_loose(s: &str) -> Result<semver::Version> {
    let trimmed = s.trim();

    match semver::Version::parse(trimmed) {
        Ok(v) => Ok(v),
        Err(source) => {
            let padded = format!("{trimmed}.0");
            semver::Version::parse(&padded).map_err(|_| Error::InvalidVersion {
                version: trimmed.to_string(),
                source,
            })
        }
    }
}
