//! # DST Transition Search
//!
//! Locates the nearest instant at which a zone's UTC offset changes,
//! searching forward or backward from a reference instant.
//!
//! ## Algorithm
//!
//! Two-phase search over the offset function, which inside any day-sized
//! bracket is a step function with at most one discontinuity:
//!
//! 1. **Coarse scan** — step one day at a time from the reference, up to
//!    [`SEARCH_HORIZON_DAYS`] steps, until the sampled offset differs from
//!    the previous sample. The two samples bracket the transition.
//! 2. **Bisection** — repeatedly halve the bracket, first to within an hour,
//!    then to within a minute. A midpoint that still reads the low-side
//!    offset moves `lo`; anything else moves `hi`.
//!
//! The reported instant is the `hi` end of the final bracket (the first
//! instant observed on the "after" side), accurate to within one minute.
//! Before/after offsets are sampled two minutes away from the boundary, so
//! no reading lands exactly on the discontinuity.
//!
//! ## Cost
//!
//! At most 450 coarse samples, ~11 hour-phase and ~6 minute-phase midpoints,
//! and 2 classification samples per call. No allocation, no I/O.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::offset::{OffsetMinutes, OffsetSource};
use crate::zone::ZoneId;

/// Number of daily coarse-scan steps before a search gives up.
///
/// Caps worst-case cost; zones whose next transition lies further out (or
/// that never transition) report "not found" rather than searching forever.
pub const SEARCH_HORIZON_DAYS: i64 = 450;

/// Which way a transition search walks from the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchDirection {
    /// Walk forward in time, locating the next transition.
    #[serde(rename = "next")]
    Forward,
    /// Walk backward in time, locating the previous transition.
    #[serde(rename = "prev")]
    Backward,
}

impl SearchDirection {
    fn day_step(self) -> Duration {
        match self {
            SearchDirection::Forward => Duration::days(1),
            SearchDirection::Backward => Duration::days(-1),
        }
    }
}

/// How local clocks moved across a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Offset increased — clocks sprang forward.
    #[serde(rename = "DST_STARTS")]
    DstStarts,
    /// Offset decreased — clocks fell back.
    #[serde(rename = "DST_ENDS")]
    DstEnds,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TransitionKind::DstStarts => "DST_STARTS",
            TransitionKind::DstEnds => "DST_ENDS",
        })
    }
}

/// A located offset change.
///
/// Invariant: `before_offset_minutes != after_offset_minutes`, and `kind`
/// follows the sign of `after − before`. Constructed fresh per search,
/// immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// The boundary instant, accurate to within one minute.
    #[serde(rename = "atUTC")]
    pub at_utc: DateTime<Utc>,
    /// Offset read two minutes before the boundary.
    pub before_offset_minutes: OffsetMinutes,
    /// Offset read two minutes after the boundary.
    pub after_offset_minutes: OffsetMinutes,
    /// Spring-forward or fall-back.
    pub kind: TransitionKind,
}

/// Find the nearest offset change for `zone`, walking `direction` from
/// `reference_utc`. Returns `None` when no change occurs within
/// [`SEARCH_HORIZON_DAYS`] daily steps — a normal outcome for fixed-offset
/// zones and for most of the year outside transition season.
pub fn find_transition<S: OffsetSource + ?Sized>(
    source: &S,
    zone: &ZoneId,
    reference_utc: DateTime<Utc>,
    direction: SearchDirection,
) -> Option<Transition> {
    let step = direction.day_step();
    let mut cursor = reference_utc;
    let mut last_offset = source.offset_minutes_at(zone, cursor);

    for _ in 0..SEARCH_HORIZON_DAYS {
        let next_cursor = cursor + step;
        let next_offset = source.offset_minutes_at(zone, next_cursor);

        if next_offset != last_offset {
            // Order the bracket lo < hi regardless of walk direction; the
            // low side keeps the offset that was read at the earlier instant.
            let (lo, hi, lo_offset) = if cursor < next_cursor {
                (cursor, next_cursor, last_offset)
            } else {
                (next_cursor, cursor, next_offset)
            };
            return Some(locate(source, zone, lo, hi, lo_offset));
        }

        cursor = next_cursor;
        last_offset = next_offset;
    }
    None
}

/// Narrow a day-sized bracket to the minute and classify the change.
fn locate<S: OffsetSource + ?Sized>(
    source: &S,
    zone: &ZoneId,
    lo: DateTime<Utc>,
    hi: DateTime<Utc>,
    lo_offset: OffsetMinutes,
) -> Transition {
    let (lo, hi) = bisect(source, zone, lo, hi, lo_offset, Duration::hours(1));
    let (_, hi) = bisect(source, zone, lo, hi, lo_offset, Duration::minutes(1));

    // First instant observed on the "after" side.
    let at = hi;
    let before = source.offset_minutes_at(zone, at - Duration::minutes(2));
    let after = source.offset_minutes_at(zone, at + Duration::minutes(2));
    let kind = if after > before {
        TransitionKind::DstStarts
    } else {
        TransitionKind::DstEnds
    };

    Transition {
        at_utc: at,
        before_offset_minutes: before,
        after_offset_minutes: after,
        kind,
    }
}

/// Halve `[lo, hi]` until it is no wider than `resolution`, keeping the
/// discontinuity inside the bracket.
fn bisect<S: OffsetSource + ?Sized>(
    source: &S,
    zone: &ZoneId,
    mut lo: DateTime<Utc>,
    mut hi: DateTime<Utc>,
    lo_offset: OffsetMinutes,
    resolution: Duration,
) -> (DateTime<Utc>, DateTime<Utc>) {
    while hi - lo > resolution {
        let mid = lo + (hi - lo) / 2;
        if source.offset_minutes_at(zone, mid) == lo_offset {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo, hi)
}

/// Whether `zone` observes any offset change near the reference instant —
/// i.e. a transition exists within the horizon in either direction.
pub fn has_transition_near<S: OffsetSource + ?Sized>(
    source: &S,
    zone: &ZoneId,
    reference_utc: DateTime<Utc>,
) -> bool {
    find_transition(source, zone, reference_utc, SearchDirection::Forward).is_some()
        || find_transition(source, zone, reference_utc, SearchDirection::Backward).is_some()
}
