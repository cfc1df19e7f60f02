mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::{happy_responder, FakeUpstream};
use readytalent_dashboard::{routes, AppState};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn app(upstream: &FakeUpstream) -> Router {
    let state = AppState::new(upstream.upstream_config()).expect("app state");
    routes::router(state, 100)
}

async fn post_json(app: &Router, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json: JsonValue = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let upstream = FakeUpstream::spawn(happy_responder).await;
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app(&upstream).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn listings_endpoint_returns_items_and_facets() {
    let upstream = FakeUpstream::spawn(happy_responder).await;
    let app = app(&upstream);

    let (status, body) = post_json(
        &app,
        "/api/listings",
        json!({ "apiToken": "token-abc", "studentId": "2100123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"][0]["jobId"], "A1");
    assert_eq!(body["items"][0]["type"], "SCHOOL");
    assert_eq!(body["items"][0]["supervisor"], "Dr. Tan");
    assert_eq!(body["items"][1]["type"], "GENERIC");
    assert_eq!(body["items"][1]["allowance"], 1200.0);
    assert_eq!(body["items"][0]["jobDetail"]["remunerationType"], "Hourly");
    assert_eq!(
        body["facets"]["companies"],
        json!(["Acme Pte Ltd", "SINGAPORE INSTITUTE OF TECHNOLOGY"])
    );
}

#[tokio::test]
async fn listings_endpoint_applies_filter() {
    let upstream = FakeUpstream::spawn(happy_responder).await;
    let app = app(&upstream);

    let (status, body) = post_json(
        &app,
        "/api/listings",
        json!({
            "apiToken": "token-abc",
            "studentId": "2100123",
            "filter": { "companies": ["Acme Pte Ltd"] }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["jobId"], "B1");
    assert_eq!(body["facets"]["companies"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn blank_token_is_bad_request() {
    let upstream = FakeUpstream::spawn(happy_responder).await;
    let app = app(&upstream);

    let (status, body) = post_json(
        &app,
        "/api/listings",
        json!({ "apiToken": "", "studentId": "2100123" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let upstream =
        FakeUpstream::spawn(|_| (StatusCode::FORBIDDEN, json!({ "message": "Forbidden" }))).await;
    let app = app(&upstream);

    let (status, body) = post_json(
        &app,
        "/api/jobs/A1/detail",
        json!({ "apiToken": "stale", "studentId": "2100123" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "token_expired");
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let upstream =
        FakeUpstream::spawn(|_| (StatusCode::INTERNAL_SERVER_ERROR, json!({}))).await;
    let app = app(&upstream);

    let (status, body) = post_json(
        &app,
        "/api/jobs/A1/applicants",
        json!({ "apiToken": "token-abc", "studentId": "2100123" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "transport");
    assert!(body["error"].as_str().unwrap().contains("applicant details for A1"));
}

#[tokio::test]
async fn details_endpoint_enriches_posted_listing() {
    let upstream = FakeUpstream::spawn(happy_responder).await;
    let app = app(&upstream);

    let (_, listings) = post_json(
        &app,
        "/api/listings",
        json!({ "apiToken": "token-abc", "studentId": "2100123" }),
    )
    .await;
    let listing = listings["items"][0].clone();

    let (status, body) = post_json(
        &app,
        "/api/listings/details",
        json!({ "apiToken": "token-abc", "studentId": "2100123", "listing": listing }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobId"], "A1");
    assert_eq!(body["type"], "SCHOOL");
    assert_eq!(body["applicants"][1]["applicantName"], "Bob Tan");
}

#[tokio::test]
async fn job_applicants_endpoint_lists_names() {
    let upstream = FakeUpstream::spawn(happy_responder).await;
    let app = app(&upstream);

    let (status, body) = post_json(
        &app,
        "/api/jobs/A1/applicants",
        json!({ "apiToken": "token-abc", "studentId": "2100123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["applicantName"], "Alice Lim");
}
