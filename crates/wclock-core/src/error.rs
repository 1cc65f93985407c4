//! # Error Types
//!
//! Errors surfaced at the edges of the core crate. The transition search
//! itself cannot fail: an unresolvable zone degrades to UTC sampling inside
//! [`crate::offset::TzdbOffsets`], and a search that finds nothing returns
//! `None`. What remains is edge validation — rejecting a zone name before a
//! search starts, for callers that want fail-fast behavior.

use thiserror::Error;

/// Top-level error type for the core crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The supplied name is not a known IANA time zone identifier.
    #[error("unknown IANA time zone: {0:?}")]
    UnknownZone(String),
}
