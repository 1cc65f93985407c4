//! # DST Rows
//!
//! Clock rows extended with the nearest offset changes in both directions,
//! located by the core transition search. A row carries up to two changes:
//! the next one (forward search) and the previous one (backward search);
//! either may be absent when the 450-day horizon holds no transition.

use chrono::{DateTime, Utc};
use serde::Serialize;

use wclock_core::{
    find_transition, OffsetSource, SearchDirection, Transition, TransitionKind,
};

use crate::clock::{wall_time, ClockRow};
use crate::directory::ZoneEntry;

/// One DST listing row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DstRow {
    /// The underlying clock reading.
    #[serde(flatten)]
    pub clock: ClockRow,

    /// Next offset change, UTC.
    #[serde(rename = "nextChangeUTC", skip_serializing_if = "Option::is_none")]
    pub next_change_utc: Option<DateTime<Utc>>,
    /// Next offset change rendered in the zone's wall time, `YYYY-MM-DD HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_change_local: Option<String>,
    /// Classification of the next change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_change_kind: Option<TransitionKind>,

    /// Previous offset change, UTC.
    #[serde(rename = "prevChangeUTC", skip_serializing_if = "Option::is_none")]
    pub prev_change_utc: Option<DateTime<Utc>>,
    /// Previous offset change rendered in the zone's wall time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_change_local: Option<String>,
    /// Classification of the previous change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_change_kind: Option<TransitionKind>,
}

impl DstRow {
    /// Compute the row for one directory entry at `now`.
    ///
    /// Runs the transition search once in each direction — the dominant cost
    /// of a DST listing.
    pub fn compute<S: OffsetSource + ?Sized>(
        source: &S,
        entry: &ZoneEntry,
        now: DateTime<Utc>,
    ) -> Self {
        let clock = ClockRow::compute(source, entry, now);
        let next = find_transition(source, &entry.time_zone, now, SearchDirection::Forward);
        let prev = find_transition(source, &entry.time_zone, now, SearchDirection::Backward);

        Self {
            clock,
            next_change_utc: next.map(|t| t.at_utc),
            next_change_local: next.map(local_label),
            next_change_kind: next.map(|t| t.kind),
            prev_change_utc: prev.map(|t| t.at_utc),
            prev_change_local: prev.map(local_label),
            prev_change_kind: prev.map(|t| t.kind),
        }
    }

    /// The next change instant as a sortable key, when present.
    pub fn next_change_sort_key(&self) -> Option<i64> {
        self.next_change_utc.map(|at| at.timestamp())
    }
}

/// Render a transition in the zone's wall time immediately after the change.
fn local_label(t: Transition) -> String {
    wall_time(t.at_utc, t.after_offset_minutes)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use wclock_core::{ScheduleOffsets, TzdbOffsets, ZoneId};

    use super::*;

    fn entry(zone: &str) -> ZoneEntry {
        ZoneEntry {
            country: "Testland".to_string(),
            city: None,
            time_zone: ZoneId::new_unchecked(zone),
            lat: None,
            lon: None,
        }
    }

    #[test]
    fn test_dst_row_new_york_january() {
        let source = TzdbOffsets::new();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let row = DstRow::compute(&source, &entry("America/New_York"), now);

        assert_eq!(row.next_change_kind, Some(TransitionKind::DstStarts));
        assert_eq!(row.prev_change_kind, Some(TransitionKind::DstEnds));
        let next = row.next_change_utc.unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap();
        assert!((next - expected).num_seconds().abs() <= 60);
        // 07:00Z at EDT (-4) is 03:00 local; the search lands within a
        // minute of the boundary.
        assert!(row.next_change_local.unwrap().starts_with("2024-03-10 0"));
    }

    #[test]
    fn test_dst_row_kolkata_has_no_changes() {
        let source = TzdbOffsets::new();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let row = DstRow::compute(&source, &entry("Asia/Kolkata"), now);
        assert!(row.next_change_utc.is_none());
        assert!(row.prev_change_utc.is_none());
        assert!(row.next_change_kind.is_none());
    }

    #[test]
    fn test_dst_row_serialization_shape() {
        let t = Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap();
        let now = t - chrono::Duration::days(10);
        let source = ScheduleOffsets::new(-300, vec![(t, -240)]);
        let row = DstRow::compute(&source, &entry("Etc/UTC"), now);

        let value = serde_json::to_value(&row).unwrap();
        // Flattened clock fields sit beside the change fields.
        assert!(value["time24"].is_string());
        assert!(value["nextChangeUTC"].is_string());
        assert_eq!(value["nextChangeKind"], "DST_STARTS");
        // Absent changes are omitted, not null.
        assert!(value.get("prevChangeUTC").is_none());
    }
}
