//! Error types for directory loading.

use thiserror::Error;

/// Top-level error type for the catalog crate.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The zone directory JSON could not be parsed.
    #[error("zone directory parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The zone directory is structurally unusable.
    #[error("invalid zone directory: {0}")]
    Directory(String),
}
