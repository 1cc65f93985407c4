//! # wclock-core — Foundational Types for the World-Clock Stack
//!
//! This crate is the bedrock of the world-clock stack. It defines the zone
//! and offset primitives and the DST transition search that every other
//! crate in the workspace builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ZoneId` is a validated
//!    wrapper over an IANA identifier — no bare strings for zone names in
//!    typed APIs.
//!
//! 2. **The timezone database is an injected capability.** All offset reads
//!    flow through the [`OffsetSource`] trait. Production code uses the
//!    `chrono-tz` backed [`TzdbOffsets`]; tests use synthetic schedules with
//!    transitions at exact, known instants.
//!
//! 3. **Searches are pure.** [`find_transition`] performs no I/O, touches no
//!    shared mutable state, and is deterministic for a given source. It is
//!    safe to run from any number of threads without coordination.
//!
//! 4. **Absence is not an error.** A zone with no transition inside the
//!    450-day horizon yields `None`, never an `Err`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wclock-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public wire-facing types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod offset;
pub mod transition;
pub mod zone;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use offset::{FixedOffsets, OffsetMinutes, OffsetSource, ScheduleOffsets, TzdbOffsets};
pub use transition::{
    find_transition, has_transition_near, SearchDirection, Transition, TransitionKind,
    SEARCH_HORIZON_DAYS,
};
pub use zone::ZoneId;
