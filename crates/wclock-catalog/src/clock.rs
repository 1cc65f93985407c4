//! # Clock Rows
//!
//! Per-entry world-clock readings: wall time in 24h and 12h forms, the
//! `UTC±HH:MM` offset string, and whether DST is in effect. Rows are pure
//! functions of the offset source, the directory entry, and the caller's
//! "now" instant.
//!
//! Wall time comes from applying the sampled offset as a `FixedOffset` to
//! the UTC instant — the only zone projection the rows need, and one that
//! works identically for synthetic offset sources.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use wclock_core::{OffsetMinutes, OffsetSource, ZoneId};

use crate::directory::{ZoneDirectory, ZoneEntry};

/// Render an offset as `UTC+05:30` / `UTC-04:00`.
pub fn format_offset(minutes: OffsetMinutes) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let magnitude = minutes.abs();
    format!("UTC{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
}

/// Project a UTC instant into local wall time at a sampled offset.
pub(crate) fn wall_time(at: DateTime<Utc>, offset_minutes: OffsetMinutes) -> DateTime<FixedOffset> {
    match FixedOffset::east_opt(offset_minutes * 60) {
        Some(offset) => at.with_timezone(&offset),
        // Out-of-range offsets cannot come from a real zone; keep UTC.
        None => at.fixed_offset(),
    }
}

/// One world-clock listing row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockRow {
    /// Country display name.
    pub country: String,
    /// City display name, when the directory has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// IANA zone the row was computed for.
    #[serde(rename = "timeZone")]
    pub time_zone: ZoneId,
    /// Local wall time, `HH:MM:SS`.
    pub time24: String,
    /// Local wall time, `hh:MM:SS AM/PM`.
    pub time12: String,
    /// Offset rendered as `UTC±HH:MM`.
    pub offset: String,
    /// Offset in minutes (sortable form of `offset`).
    pub offset_minutes: OffsetMinutes,
    /// Whether a daylight-saving shift is in effect.
    #[serde(rename = "isDST")]
    pub is_dst: bool,
    /// Latitude in degrees, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude in degrees, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl ClockRow {
    /// Compute the row for one directory entry at `now`.
    pub fn compute<S: OffsetSource + ?Sized>(
        source: &S,
        entry: &ZoneEntry,
        now: DateTime<Utc>,
    ) -> Self {
        let offset_minutes = source.offset_minutes_at(&entry.time_zone, now);
        let local = wall_time(now, offset_minutes);
        Self {
            country: entry.country.clone(),
            city: entry.city.clone(),
            time_zone: entry.time_zone.clone(),
            time24: local.format("%H:%M:%S").to_string(),
            time12: local.format("%I:%M:%S %p").to_string(),
            offset: format_offset(offset_minutes),
            offset_minutes,
            is_dst: source.dst_savings_at(&entry.time_zone, now) > 0,
            lat: entry.lat,
            lon: entry.lon,
        }
    }
}

/// One row of an offset-diff report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRow {
    /// Country display name.
    pub country: String,
    /// IANA zone compared against the base.
    #[serde(rename = "timeZone")]
    pub time_zone: ZoneId,
    /// Whole-hour difference from the base zone, rounded half-up.
    pub diff_hours: i32,
}

/// Whole-hour offset differences of every directory entry against `base`.
///
/// An unresolvable base degrades to UTC through the offset source, matching
/// the search-path policy.
pub fn offset_diff<S: OffsetSource + ?Sized>(
    source: &S,
    directory: &ZoneDirectory,
    base: &ZoneId,
    now: DateTime<Utc>,
) -> Vec<DiffRow> {
    let base_offset = source.offset_minutes_at(base, now);
    directory
        .entries()
        .iter()
        .map(|entry| {
            let offset = source.offset_minutes_at(&entry.time_zone, now);
            DiffRow {
                country: entry.country.clone(),
                time_zone: entry.time_zone.clone(),
                diff_hours: round_half_up(f64::from(offset - base_offset) / 60.0),
            }
        })
        .collect()
}

/// Round half-up (toward +∞), the rounding the original report used.
fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}
