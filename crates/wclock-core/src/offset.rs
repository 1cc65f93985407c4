//! # Offset Sources — The Injected Timezone Database
//!
//! The transition search never talks to a timezone database directly. It
//! reads offsets through the [`OffsetSource`] capability, so the search stays
//! pure and unit tests can model zones with transitions at exact instants.
//!
//! ## Degradation Invariant
//!
//! An offset source never fails mid-search. A zone name the production
//! database cannot resolve samples as UTC (offset 0) — inherited from the
//! original service, which substituted a "safe zone" rather than aborting a
//! half-finished scan. Callers that prefer fail-fast semantics validate the
//! name up front with [`crate::ZoneId::new`]; the fallback here is logged so
//! it stays observable.

use chrono::{DateTime, Offset as _, Utc};
use chrono_tz::OffsetComponents as _;

use crate::zone::ZoneId;

/// Signed minutes a zone's local clock is ahead of (+) or behind (−) UTC.
pub type OffsetMinutes = i32;

/// Capability for reading a zone's UTC offset at an instant.
///
/// Implementations must be deterministic: the same `(zone, at)` pair always
/// yields the same offset. The transition search relies on this to bisect.
pub trait OffsetSource {
    /// The zone's UTC offset at `at`, in minutes.
    fn offset_minutes_at(&self, zone: &ZoneId, at: DateTime<Utc>) -> OffsetMinutes;

    /// Minutes of daylight-saving shift in effect at `at` (0 = standard time).
    fn dst_savings_at(&self, zone: &ZoneId, at: DateTime<Utc>) -> OffsetMinutes {
        let _ = (zone, at);
        0
    }
}

/// Production offset source backed by the embedded `chrono-tz` database.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzdbOffsets;

impl TzdbOffsets {
    /// Create a tzdb-backed offset source.
    pub fn new() -> Self {
        Self
    }
}

impl OffsetSource for TzdbOffsets {
    fn offset_minutes_at(&self, zone: &ZoneId, at: DateTime<Utc>) -> OffsetMinutes {
        match zone.resolve() {
            Some(tz) => {
                let offset = at.with_timezone(&tz).offset().fix();
                offset.local_minus_utc() / 60
            }
            None => {
                tracing::debug!(zone = %zone, "unresolved zone, sampling as UTC");
                0
            }
        }
    }

    fn dst_savings_at(&self, zone: &ZoneId, at: DateTime<Utc>) -> OffsetMinutes {
        match zone.resolve() {
            Some(tz) => {
                let savings = at.with_timezone(&tz).offset().dst_offset();
                savings.num_minutes() as OffsetMinutes
            }
            None => 0,
        }
    }
}

/// A source that reports the same offset at every instant, for any zone.
///
/// Models permanently-fixed-offset zones in tests; a search over it always
/// exhausts the horizon and returns `None`.
#[derive(Debug, Clone, Copy)]
pub struct FixedOffsets(pub OffsetMinutes);

impl OffsetSource for FixedOffsets {
    fn offset_minutes_at(&self, _zone: &ZoneId, _at: DateTime<Utc>) -> OffsetMinutes {
        self.0
    }
}

/// A piecewise-constant offset schedule with transitions at exact instants.
///
/// The offset is `standard` before the first step; each step `(start, offset)`
/// takes effect at `start` inclusive. Steps apply to every zone the source is
/// asked about — schedule sources model a single synthetic zone.
#[derive(Debug, Clone)]
pub struct ScheduleOffsets {
    standard: OffsetMinutes,
    steps: Vec<(DateTime<Utc>, OffsetMinutes)>,
}

impl ScheduleOffsets {
    /// Build a schedule from a standard-time offset and dated steps.
    ///
    /// Steps are sorted by instant; later entries win on exact ties.
    pub fn new(standard: OffsetMinutes, mut steps: Vec<(DateTime<Utc>, OffsetMinutes)>) -> Self {
        steps.sort_by_key(|(start, _)| *start);
        Self { standard, steps }
    }

    /// A schedule with no transitions at all.
    pub fn fixed(standard: OffsetMinutes) -> Self {
        Self::new(standard, Vec::new())
    }
}

impl OffsetSource for ScheduleOffsets {
    fn offset_minutes_at(&self, _zone: &ZoneId, at: DateTime<Utc>) -> OffsetMinutes {
        let mut current = self.standard;
        for (start, offset) in &self.steps {
            if at >= *start {
                current = *offset;
            } else {
                break;
            }
        }
        current
    }

    fn dst_savings_at(&self, zone: &ZoneId, at: DateTime<Utc>) -> OffsetMinutes {
        // Synthetic zones treat anything above standard time as savings.
        (self.offset_minutes_at(zone, at) - self.standard).max(0)
    }
}
