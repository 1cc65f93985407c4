//! # Query Engine
//!
//! Filter, sort, and page the directory into response envelopes. The
//! pipeline is filter → sort the whole filtered set → page; sorting happens
//! before pagination so a page boundary never splits an ordering.
//!
//! Parameter normalization is lenient, the way a query string deserves:
//! blank filters are ignored, unknown sort keys fall back to `country`,
//! anything but `desc` means ascending, and limits clamp to 1..=500.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wclock_core::OffsetSource;

use crate::clock::ClockRow;
use crate::directory::{ZoneDirectory, ZoneEntry};
use crate::dst::DstRow;

/// Largest page a listing will return.
pub const MAX_PAGE_SIZE: usize = 500;
/// Page size when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Row orderings a listing supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Country display name, case-insensitive.
    Country,
    /// City display name, case-insensitive; rows without a city sort first.
    City,
    /// Local wall-clock time of day.
    Time24,
    /// UTC offset in minutes.
    Offset,
    /// Instant of the next offset change; rows without one sort last.
    /// Only meaningful for DST listings.
    NextChange,
}

impl SortKey {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "country" => Some(Self::Country),
            "city" => Some(Self::City),
            "time24" => Some(Self::Time24),
            "offset" => Some(Self::Offset),
            "nextChange" => Some(Self::NextChange),
            _ => None,
        }
    }
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDir {
    /// Ascending (the default).
    Asc,
    /// Descending.
    Desc,
}

/// Listing parameters, as they arrive from a query string or CLI flags.
///
/// All fields are optional; normalization happens inside the page builders.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Substring match over `country city zone`, case-insensitive.
    pub q: Option<String>,
    /// Exact country match, case-insensitive.
    pub country: Option<String>,
    /// Exact IANA zone match, case-sensitive.
    pub tz: Option<String>,
    /// DST listings only: keep just the zones currently observing DST.
    pub active_only: bool,
    /// Requested page size; clamped to 1..=[`MAX_PAGE_SIZE`].
    pub limit: Option<i64>,
    /// Requested page start; negative values clamp to 0.
    pub offset: Option<i64>,
    /// Requested sort key; unknown keys fall back to `country`.
    pub sort: Option<String>,
    /// Requested direction; anything but `"desc"` is ascending.
    pub dir: Option<String>,
}

impl ListParams {
    fn effective_limit(&self) -> usize {
        match self.limit {
            Some(raw) => (raw.clamp(1, MAX_PAGE_SIZE as i64)) as usize,
            None => DEFAULT_PAGE_SIZE,
        }
    }

    fn effective_offset(&self) -> usize {
        self.offset.unwrap_or(0).max(0) as usize
    }

    fn sort_key(&self, allow_next_change: bool) -> SortKey {
        let parsed = self
            .sort
            .as_deref()
            .and_then(SortKey::parse)
            .unwrap_or(SortKey::Country);
        if parsed == SortKey::NextChange && !allow_next_change {
            SortKey::Country
        } else {
            parsed
        }
    }

    fn sort_dir(&self) -> SortDir {
        match self.dir.as_deref() {
            Some("desc") => SortDir::Desc,
            _ => SortDir::Asc,
        }
    }

    fn matches(&self, entry: &ZoneEntry) -> bool {
        let country = entry.country.to_lowercase();
        let city = entry
            .city
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        let zone = entry.time_zone.as_str().to_lowercase();

        if let Some(want) = normalized(&self.country) {
            if country != want.to_lowercase() {
                return false;
            }
        }
        if let Some(want) = normalized(&self.tz) {
            if entry.time_zone.as_str() != want {
                return false;
            }
        }
        if let Some(want) = normalized(&self.q) {
            let haystack = format!("{country} {city} {zone}");
            if !haystack.contains(&want.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Treat missing, empty, and whitespace-only filters alike.
fn normalized(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Envelope for a world-clock listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockPage {
    /// Instant the report was computed at.
    #[serde(rename = "generatedAtUTC")]
    pub generated_at_utc: DateTime<Utc>,
    /// Rows matching the filters, before paging.
    pub total: usize,
    /// Effective page size.
    pub limit: usize,
    /// Effective page start.
    pub offset: usize,
    /// Rows in this page.
    pub count: usize,
    /// Effective sort key.
    pub sort: SortKey,
    /// Effective direction.
    pub dir: SortDir,
    /// The page itself.
    pub clocks: Vec<ClockRow>,
}

/// Envelope for a DST listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DstPage {
    /// Instant the report was computed at.
    #[serde(rename = "generatedAtUTC")]
    pub generated_at_utc: DateTime<Utc>,
    /// Rows matching the filters, before paging.
    pub total: usize,
    /// Effective page size.
    pub limit: usize,
    /// Effective page start.
    pub offset: usize,
    /// Rows in this page.
    pub count: usize,
    /// Effective sort key.
    pub sort: SortKey,
    /// Effective direction.
    pub dir: SortDir,
    /// The page itself.
    pub clocks: Vec<DstRow>,
}

/// Build a world-clock page: every matching entry's current reading.
pub fn world_clock_page<S: OffsetSource + ?Sized>(
    source: &S,
    directory: &ZoneDirectory,
    params: &ListParams,
    now: DateTime<Utc>,
) -> ClockPage {
    let sort = params.sort_key(false);
    let dir = params.sort_dir();
    let limit = params.effective_limit();
    let offset = params.effective_offset();

    let mut rows: Vec<ClockRow> = directory
        .entries()
        .iter()
        .filter(|entry| params.matches(entry))
        .map(|entry| ClockRow::compute(source, entry, now))
        .collect();
    let total = rows.len();

    rows.sort_by(|a, b| directed(compare_clock(a, b, sort), dir));
    let clocks: Vec<ClockRow> = rows.into_iter().skip(offset).take(limit).collect();

    ClockPage {
        generated_at_utc: now,
        total,
        limit,
        offset,
        count: clocks.len(),
        sort,
        dir,
        clocks,
    }
}

/// Build a DST page: matching entries that observe an offset change near
/// `now` (or, with `active_only`, that are currently in DST), with their
/// next/previous transitions.
pub fn dst_page<S: OffsetSource + ?Sized>(
    source: &S,
    directory: &ZoneDirectory,
    params: &ListParams,
    now: DateTime<Utc>,
) -> DstPage {
    let sort = params.sort_key(true);
    let dir = params.sort_dir();
    let limit = params.effective_limit();
    let offset = params.effective_offset();

    let mut rows: Vec<DstRow> = directory
        .entries()
        .iter()
        .filter(|entry| params.matches(entry))
        .map(|entry| DstRow::compute(source, entry, now))
        .filter(|row| {
            if params.active_only {
                row.clock.is_dst
            } else {
                row.next_change_utc.is_some() || row.prev_change_utc.is_some()
            }
        })
        .collect();
    let total = rows.len();

    rows.sort_by(|a, b| directed(compare_dst(a, b, sort, dir), dir));
    let clocks: Vec<DstRow> = rows.into_iter().skip(offset).take(limit).collect();

    DstPage {
        generated_at_utc: now,
        total,
        limit,
        offset,
        count: clocks.len(),
        sort,
        dir,
        clocks,
    }
}

fn directed(ordering: Ordering, dir: SortDir) -> Ordering {
    match dir {
        SortDir::Asc => ordering,
        SortDir::Desc => ordering.reverse(),
    }
}

fn compare_clock(a: &ClockRow, b: &ClockRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Country => a.country.to_lowercase().cmp(&b.country.to_lowercase()),
        SortKey::City => lower_or_empty(&a.city).cmp(&lower_or_empty(&b.city)),
        SortKey::Time24 => time24_seconds(&a.time24).cmp(&time24_seconds(&b.time24)),
        SortKey::Offset => a.offset_minutes.cmp(&b.offset_minutes),
        // Normalized away for clock listings; treat as country defensively.
        SortKey::NextChange => a.country.to_lowercase().cmp(&b.country.to_lowercase()),
    }
}

fn compare_dst(a: &DstRow, b: &DstRow, key: SortKey, dir: SortDir) -> Ordering {
    match key {
        SortKey::NextChange => {
            // Rows without a next change take the sentinel that keeps them
            // last after the direction flip is applied.
            let missing = match dir {
                SortDir::Asc => i64::MAX,
                SortDir::Desc => i64::MIN,
            };
            let ka = a.next_change_sort_key().unwrap_or(missing);
            let kb = b.next_change_sort_key().unwrap_or(missing);
            ka.cmp(&kb)
        }
        other => compare_clock(&a.clock, &b.clock, other),
    }
}

fn lower_or_empty(value: &Option<String>) -> String {
    value.as_deref().map(str::to_lowercase).unwrap_or_default()
}

/// Seconds past midnight for an `HH:MM:SS` string; malformed input counts
/// missing components as zero.
fn time24_seconds(value: &str) -> u32 {
    let mut parts = value.split(':').map(|p| p.parse::<u32>().unwrap_or(0));
    let h = parts.next().unwrap_or(0);
    let m = parts.next().unwrap_or(0);
    let s = parts.next().unwrap_or(0);
    h * 3600 + m * 60 + s
}
