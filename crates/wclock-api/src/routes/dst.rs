//! # DST Routes
//!
//! - `GET /v1/dst`        — paged listing of zones with nearby transitions
//! - `GET /v1/dst/lookup` — locate one zone's next or previous transition
//!
//! The listing inherits the lenient zone policy (unknown zones read as UTC
//! and simply produce no transitions); the lookup route validates its zone
//! strictly, because a caller naming one specific zone almost certainly
//! wants to hear about a typo.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use wclock_catalog::{dst_page, DstPage, ListParams};
use wclock_core::{find_transition, SearchDirection, Transition, ZoneId};

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the DST router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/dst", get(list_dst))
        .route("/v1/dst/lookup", get(lookup_transition))
}

/// Query parameters for the DST listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub(crate) struct DstListParams {
    /// Substring search over country, city, and zone name.
    q: Option<String>,
    /// Exact country match.
    country: Option<String>,
    /// Exact IANA zone match.
    tz: Option<String>,
    /// `true` keeps only zones currently observing DST.
    active: Option<String>,
    /// Page size, 1..=500 (default 100).
    limit: Option<i64>,
    /// Page start (default 0).
    offset: Option<i64>,
    /// Sort key: country | city | time24 | offset | nextChange.
    sort: Option<String>,
    /// Sort direction: asc | desc (default asc).
    dir: Option<String>,
}

impl DstListParams {
    fn into_list_params(self) -> ListParams {
        // Anything but a literal "true" means inactive filtering, matching
        // the tolerant query-string convention of the rest of the grammar.
        let active_only = self
            .active
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));
        ListParams {
            q: self.q,
            country: self.country,
            tz: self.tz,
            active_only,
            limit: self.limit,
            offset: self.offset,
            sort: self.sort,
            dir: self.dir,
        }
    }
}

/// List zones with an offset change near now, with their transitions.
#[utoipa::path(
    get,
    path = "/v1/dst",
    params(DstListParams),
    responses(
        (status = 200, description = "Paged DST listing envelope"),
    ),
    tag = "dst"
)]
pub(crate) async fn list_dst(
    State(state): State<AppState>,
    Query(params): Query<DstListParams>,
) -> Json<DstPage> {
    let now = Utc::now();
    let page = dst_page(
        state.offsets.as_ref(),
        &state.directory,
        &params.into_list_params(),
        now,
    );
    Json(page)
}

/// Query parameters for the transition lookup.
#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct LookupParams {
    /// IANA zone to search (validated strictly).
    tz: String,
    /// Search direction: `next` (default) or `prev`.
    #[param(value_type = Option<String>)]
    direction: Option<SearchDirection>,
    /// Reference instant, RFC 3339 (default now).
    at: Option<DateTime<Utc>>,
}

/// Lookup response: the located transition, or `null` when the horizon
/// holds none.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LookupResponse {
    /// The searched zone.
    #[serde(rename = "timeZone")]
    time_zone: ZoneId,
    /// The direction that was searched.
    direction: SearchDirection,
    /// The reference instant the search walked from.
    #[serde(rename = "referenceUTC")]
    reference_utc: DateTime<Utc>,
    /// The located transition; `null` is a normal "nothing nearby".
    transition: Option<Transition>,
}

/// Locate one zone's nearest offset change.
#[utoipa::path(
    get,
    path = "/v1/dst/lookup",
    params(LookupParams),
    responses(
        (status = 200, description = "Transition record, or null when none lies within the 450-day horizon"),
        (status = 422, description = "Unknown IANA zone"),
    ),
    tag = "dst"
)]
pub(crate) async fn lookup_transition(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LookupResponse>, AppError> {
    let zone = ZoneId::new(params.tz).map_err(|e| AppError::Validation(e.to_string()))?;
    let direction = params.direction.unwrap_or(SearchDirection::Forward);
    let reference_utc = params.at.unwrap_or_else(Utc::now);

    let transition = find_transition(state.offsets.as_ref(), &zone, reference_utc, direction);
    tracing::debug!(
        zone = %zone,
        ?direction,
        found = transition.is_some(),
        "transition lookup"
    );

    Ok(Json(LookupResponse {
        time_zone: zone,
        direction,
        reference_utc,
        transition,
    }))
}
