//! # wclock-catalog — Zone Directory and Report Building
//!
//! Turns the core's transition search into the rows a world-clock surface
//! displays. Three report shapes:
//!
//! - **Clock rows** — current wall time, offset string, and DST flag for
//!   every directory entry ([`ClockRow`]).
//! - **DST rows** — clock rows extended with the next and previous offset
//!   change located by the transition search ([`DstRow`]).
//! - **Offset diffs** — whole-hour differences against a base zone
//!   ([`DiffRow`]).
//!
//! The query engine ([`query`]) applies the directory filters, sorts the
//! whole filtered set, and pages it into a response envelope.
//!
//! ## Crate Policy
//!
//! - Depends only on `wclock-core` internally.
//! - Pure: all report builders take the offset source and the "now" instant
//!   as arguments; nothing here reads the system clock.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod clock;
pub mod directory;
pub mod dst;
pub mod error;
pub mod query;

// Re-export primary types for ergonomic imports.
pub use clock::{format_offset, offset_diff, ClockRow, DiffRow};
pub use directory::{ZoneDirectory, ZoneEntry};
pub use dst::DstRow;
pub use error::CatalogError;
pub use query::{dst_page, world_clock_page, ClockPage, DstPage, ListParams, SortDir, SortKey};
