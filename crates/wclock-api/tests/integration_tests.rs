//! # Integration Tests for wclock-api
//!
//! Tests health probes, clock listing filters and paging, offset diffs,
//! DST listings, transition lookups, error mapping, and OpenAPI generation.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wclock_api::AppState;

/// Helper: build the test app over the embedded zone directory.
fn test_app() -> axum::Router {
    let state = AppState::new().expect("embedded directory must parse");
    wclock_api::app(state)
}

/// Helper: GET a path and return the response.
async fn get(app: axum::Router, uri: &str) -> axum::http::Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = get(test_app(), "/health/liveness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = get(test_app(), "/health/readiness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- World-Clock Listing ------------------------------------------------------

#[tokio::test]
async fn test_worldclock_envelope_shape() {
    let response = get(test_app(), "/v1/worldclock").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert!(body["generatedAtUTC"].is_string());
    assert_eq!(body["limit"], 100);
    assert_eq!(body["offset"], 0);
    assert_eq!(body["sort"], "country");
    assert_eq!(body["dir"], "asc");
    let total = body["total"].as_u64().unwrap();
    assert!(total > 50, "embedded directory should be sizable");
    assert_eq!(body["count"], total.min(100));
    let clocks = body["clocks"].as_array().unwrap();
    let first = &clocks[0];
    assert!(first["timeZone"].is_string());
    assert!(first["time24"].is_string());
    assert!(first["offset"].as_str().unwrap().starts_with("UTC"));
    assert!(first["isDST"].is_boolean());
}

#[tokio::test]
async fn test_worldclock_tz_filter() {
    let response = get(test_app(), "/v1/worldclock?tz=Asia/Kolkata").await;
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["clocks"][0]["timeZone"], "Asia/Kolkata");
    assert_eq!(body["clocks"][0]["offset"], "UTC+05:30");
}

#[tokio::test]
async fn test_worldclock_limit_clamps_to_max() {
    let response = get(test_app(), "/v1/worldclock?limit=9999").await;
    let body = body_json(response).await;
    assert_eq!(body["limit"], 500);
}

#[tokio::test]
async fn test_worldclock_sort_offset_desc() {
    let response = get(test_app(), "/v1/worldclock?sort=offset&dir=desc&limit=500").await;
    let body = body_json(response).await;
    assert_eq!(body["sort"], "offset");
    assert_eq!(body["dir"], "desc");
    let offsets: Vec<i64> = body["clocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["offsetMinutes"].as_i64().unwrap())
        .collect();
    let mut sorted = offsets.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(offsets, sorted);
}

// -- Single Entry -------------------------------------------------------------

#[tokio::test]
async fn test_entry_found() {
    let response = get(test_app(), "/v1/worldclock/entry?tz=Asia/Tokyo").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["country"], "Japan");
    assert_eq!(body["timeZone"], "Asia/Tokyo");
}

#[tokio::test]
async fn test_entry_not_in_directory_is_404() {
    // A real IANA zone that the curated directory does not carry.
    let response = get(test_app(), "/v1/worldclock/entry?tz=Australia/Eucla").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 404);
}

// -- Offset Diff --------------------------------------------------------------

#[tokio::test]
async fn test_diff_against_kolkata_base() {
    let response = get(test_app(), "/v1/worldclock/diff?base=Asia/Kolkata").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["base"], "Asia/Kolkata");
    let rows = body["rows"].as_array().unwrap();
    // Tokyo is +3:30 ahead of Kolkata; half hours round up.
    let tokyo = rows
        .iter()
        .find(|r| r["timeZone"] == "Asia/Tokyo")
        .unwrap();
    assert_eq!(tokyo["diffHours"], 4);
    let kolkata = rows
        .iter()
        .find(|r| r["timeZone"] == "Asia/Kolkata")
        .unwrap();
    assert_eq!(kolkata["diffHours"], 0);
}

#[tokio::test]
async fn test_diff_defaults_to_utc_base() {
    let response = get(test_app(), "/v1/worldclock/diff").await;
    let body = body_json(response).await;
    assert_eq!(body["base"], "UTC");
}

// -- DST Listing --------------------------------------------------------------

#[tokio::test]
async fn test_dst_listing_country_filter() {
    let response = get(test_app(), "/v1/dst?country=Germany").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    let row = &body["clocks"][0];
    assert_eq!(row["timeZone"], "Europe/Berlin");
    // Berlin always has a transition within the horizon, on one side or both.
    assert!(row["nextChangeUTC"].is_string() || row["prevChangeUTC"].is_string());
}

#[tokio::test]
async fn test_dst_listing_excludes_fixed_offset_zones() {
    let response = get(test_app(), "/v1/dst?tz=Asia/Kolkata").await;
    let body = body_json(response).await;
    assert_eq!(body["total"], 0);
}

// -- Transition Lookup --------------------------------------------------------

#[tokio::test]
async fn test_lookup_next_transition_new_york() {
    let response = get(
        test_app(),
        "/v1/dst/lookup?tz=America/New_York&at=2024-01-15T00:00:00Z",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["timeZone"], "America/New_York");
    assert_eq!(body["direction"], "next");
    assert_eq!(body["referenceUTC"], "2024-01-15T00:00:00Z");

    let transition = &body["transition"];
    assert_eq!(transition["kind"], "DST_STARTS");
    assert_eq!(transition["beforeOffsetMinutes"], -300);
    assert_eq!(transition["afterOffsetMinutes"], -240);
    // Minute-resolution search: the instant lands within a minute after
    // the true boundary at 2024-03-10T07:00:00Z.
    let at = transition["atUTC"].as_str().unwrap();
    assert!(at.starts_with("2024-03-10T07:0"), "got {at}");
}

#[tokio::test]
async fn test_lookup_prev_transition_new_york() {
    let response = get(
        test_app(),
        "/v1/dst/lookup?tz=America/New_York&direction=prev&at=2024-01-15T00:00:00Z",
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["direction"], "prev");
    let transition = &body["transition"];
    assert_eq!(transition["kind"], "DST_ENDS");
    let at = transition["atUTC"].as_str().unwrap();
    assert!(at.starts_with("2023-11-05T06:0"), "got {at}");
}

#[tokio::test]
async fn test_lookup_fixed_offset_zone_yields_null() {
    let response = get(
        test_app(),
        "/v1/dst/lookup?tz=Asia/Kolkata&at=2024-01-15T00:00:00Z",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["transition"].is_null());
}

#[tokio::test]
async fn test_lookup_unknown_zone_is_422() {
    let response = get(test_app(), "/v1/dst/lookup?tz=Not/A_Zone").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 422);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Not/A_Zone"));
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_spec_serves() {
    let response = get(test_app(), "/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/v1/worldclock"].is_object());
    assert!(body["paths"]["/v1/dst/lookup"].is_object());
}
