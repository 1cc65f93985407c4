//! # wclock-cli — World-Clock Command-Line Interface
//!
//! Operator conveniences over the library surface: look up a zone's next or
//! previous offset change, test whether a zone observes DST at all, and
//! print a clock table for the embedded zone directory.
//!
//! ## Subcommands
//!
//! - `next` / `prev` — Locate one zone's nearest transition, printed as JSON
//! - `has-dst` — Exit status reflects whether the zone changes offset
//! - `clocks` — Filterable, sortable clock table
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers delegate to `wclock-core` and `wclock-catalog` — no report
//!   building here.
//! - Errors surface through `anyhow` with enough context to act on.

pub mod clocks;
pub mod transition;
