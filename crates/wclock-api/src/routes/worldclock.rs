//! # World-Clock Routes
//!
//! - `GET /v1/worldclock`       — paged clock listing
//! - `GET /v1/worldclock/entry` — a single directory entry's clock row
//! - `GET /v1/worldclock/diff`  — whole-hour offsets against a base zone

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use wclock_catalog::{offset_diff, ClockPage, ClockRow, DiffRow, ListParams};
use wclock_core::ZoneId;

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the world-clock router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/worldclock", get(list_worldclock))
        .route("/v1/worldclock/entry", get(get_entry))
        .route("/v1/worldclock/diff", get(diff_against_base))
}

/// Query parameters for the clock listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub(crate) struct WorldClockParams {
    /// Substring search over country, city, and zone name.
    q: Option<String>,
    /// Exact country match.
    country: Option<String>,
    /// Exact IANA zone match.
    tz: Option<String>,
    /// Page size, 1..=500 (default 100).
    limit: Option<i64>,
    /// Page start (default 0).
    offset: Option<i64>,
    /// Sort key: country | city | time24 | offset (default country).
    sort: Option<String>,
    /// Sort direction: asc | desc (default asc).
    dir: Option<String>,
}

impl WorldClockParams {
    fn into_list_params(self) -> ListParams {
        ListParams {
            q: self.q,
            country: self.country,
            tz: self.tz,
            active_only: false,
            limit: self.limit,
            offset: self.offset,
            sort: self.sort,
            dir: self.dir,
        }
    }
}

/// List current clock readings for the zone directory.
#[utoipa::path(
    get,
    path = "/v1/worldclock",
    params(WorldClockParams),
    responses(
        (status = 200, description = "Paged clock listing envelope"),
    ),
    tag = "worldclock"
)]
pub(crate) async fn list_worldclock(
    State(state): State<AppState>,
    Query(params): Query<WorldClockParams>,
) -> Json<ClockPage> {
    let now = Utc::now();
    let page = wclock_catalog::query::world_clock_page(
        state.offsets.as_ref(),
        &state.directory,
        &params.into_list_params(),
        now,
    );
    Json(page)
}

/// Query parameters for the single-entry route.
#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct EntryParams {
    /// IANA zone of the directory entry.
    tz: String,
}

/// Fetch the clock row for one directory entry.
#[utoipa::path(
    get,
    path = "/v1/worldclock/entry",
    params(EntryParams),
    responses(
        (status = 200, description = "Clock row for the entry"),
        (status = 404, description = "Zone not in the directory"),
    ),
    tag = "worldclock"
)]
pub(crate) async fn get_entry(
    State(state): State<AppState>,
    Query(params): Query<EntryParams>,
) -> Result<Json<ClockRow>, AppError> {
    let entry = state
        .directory
        .entries()
        .iter()
        .find(|e| e.time_zone.as_str() == params.tz)
        .ok_or_else(|| AppError::NotFound(format!("zone not in directory: {}", params.tz)))?;
    let row = ClockRow::compute(state.offsets.as_ref(), entry, Utc::now());
    Ok(Json(row))
}

/// Query parameters for the diff route.
#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct DiffParams {
    /// Base zone to diff against (default UTC). An unknown base reads as UTC.
    base: Option<String>,
}

/// Offset-diff report.
#[derive(Debug, Serialize)]
pub(crate) struct DiffReport {
    /// The base zone the rows were diffed against.
    base: String,
    /// One row per directory entry.
    rows: Vec<DiffRow>,
}

/// Whole-hour time differences of every entry against a base zone.
#[utoipa::path(
    get,
    path = "/v1/worldclock/diff",
    params(DiffParams),
    responses(
        (status = 200, description = "Offset differences against the base zone"),
    ),
    tag = "worldclock"
)]
pub(crate) async fn diff_against_base(
    State(state): State<AppState>,
    Query(params): Query<DiffParams>,
) -> Json<DiffReport> {
    let base_name = params.base.unwrap_or_else(|| "UTC".to_string());
    // Lenient by design: an unresolvable base degrades to UTC inside the
    // offset source rather than failing the whole report.
    let base = ZoneId::new_unchecked(base_name.clone());
    let rows = offset_diff(
        state.offsets.as_ref(),
        &state.directory,
        &base,
        Utc::now(),
    );
    Json(DiffReport { base: base_name, rows })
}
