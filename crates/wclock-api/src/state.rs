//! # Application State
//!
//! Shared, immutable state handed to every handler: the zone directory and
//! the tzdb-backed offset source. Both are read-only after startup, so the
//! state clones freely with no locking.

use std::sync::Arc;

use wclock_catalog::{CatalogError, ZoneDirectory};
use wclock_core::TzdbOffsets;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The displayable places.
    pub directory: Arc<ZoneDirectory>,
    /// The production offset source.
    pub offsets: Arc<TzdbOffsets>,
}

impl AppState {
    /// State over the embedded zone directory.
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self::with_directory(ZoneDirectory::builtin()?))
    }

    /// State over a caller-supplied directory.
    pub fn with_directory(directory: ZoneDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
            offsets: Arc::new(TzdbOffsets::new()),
        }
    }
}
