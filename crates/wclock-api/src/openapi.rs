//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
///
/// Registers all utoipa-documented routes and tags. Serves as the single
/// source of truth for integrators.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "World Clock API",
        version = "0.1.0",
        description = "Axum API for the world-clock stack.\n\nProvides:\n- **Clock listings** with filter, sort, and paging over a curated zone directory\n- **Offset diffs** of every directory zone against a chosen base zone\n- **DST reports** pairing each zone with its next and previous offset change\n- **Transition lookup** for a single IANA zone in either direction\n\nAll endpoints are unauthenticated GETs.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::worldclock::list_worldclock,
        crate::routes::worldclock::get_entry,
        crate::routes::worldclock::diff_against_base,
        crate::routes::dst::list_dst,
        crate::routes::dst::lookup_transition,
    ),
    tags(
        (name = "worldclock", description = "Clock listings, single entries, and offset diffs"),
        (name = "dst", description = "DST listings and single-zone transition lookup"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
///
/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
