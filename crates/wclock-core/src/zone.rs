//! # Zone Identifiers
//!
//! Defines `ZoneId`, a newtype over an IANA Time Zone Database name such as
//! `"America/New_York"`.
//!
//! ## Two Constructors, Two Policies
//!
//! - [`ZoneId::new`] validates the name against the embedded `chrono-tz`
//!   database and rejects unknown zones. This is the fail-fast path for
//!   request edges, where a typo should be a 4xx rather than a silent
//!   UTC-shaped answer.
//! - [`ZoneId::new_unchecked`] wraps any string. Searches over an unchecked
//!   zone do not crash: the offset source degrades to UTC sampling for names
//!   it cannot resolve (see [`crate::offset::TzdbOffsets`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An IANA time zone identifier (e.g. `"Europe/London"`).
///
/// Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    /// Create a zone identifier, validating it against the IANA database.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownZone`] when `chrono-tz` does not know the
    /// name.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.parse::<chrono_tz::Tz>().is_err() {
            return Err(CoreError::UnknownZone(name));
        }
        Ok(Self(name))
    }

    /// Wrap a zone name without validation.
    ///
    /// Lookups against an unknown name sample as UTC instead of failing.
    pub fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The UTC zone.
    pub fn utc() -> Self {
        Self("UTC".to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against the embedded IANA database.
    pub fn resolve(&self) -> Option<chrono_tz::Tz> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ZoneId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
