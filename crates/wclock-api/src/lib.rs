//! # wclock-api — Axum API Service for the World-Clock Stack
//!
//! Thin HTTP dress over `wclock-catalog`: handlers parse query parameters,
//! delegate to the catalog's report builders, and serialize the envelopes.
//! No business logic lives in this crate.
//!
//! ## API Surface
//!
//! | Route                      | Module                   | Report              |
//! |----------------------------|--------------------------|---------------------|
//! | `GET /v1/worldclock`       | [`routes::worldclock`]   | Clock listing       |
//! | `GET /v1/worldclock/entry` | [`routes::worldclock`]   | Single clock row    |
//! | `GET /v1/worldclock/diff`  | [`routes::worldclock`]   | Offset diff         |
//! | `GET /v1/dst`              | [`routes::dst`]          | DST listing         |
//! | `GET /v1/dst/lookup`       | [`routes::dst`]          | Single transition   |
//! | `GET /health/*`            | (here)                   | Probes              |
//! | `GET /openapi.json`        | [`openapi`]              | OpenAPI 3.1 spec    |
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → CorsLayer (permissive) → 2 MiB body limit → Handler

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes stay outside the API middleware so they remain reachable
/// under any CORS or limit configuration.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::worldclock::router())
        .merge(routes::dst::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let probes = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .with_state(state);

    Router::new().merge(probes).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the service can actually build a report.
///
/// Checks:
/// - The zone directory loaded and is non-empty.
/// - The offset source resolves a reference zone.
///
/// Returns 200 "ready" or 503 with a diagnostic message.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.directory.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "zone directory empty").into_response();
    }
    if wclock_core::ZoneId::utc().resolve().is_none() {
        return (StatusCode::SERVICE_UNAVAILABLE, "timezone database degraded").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
