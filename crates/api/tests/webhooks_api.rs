//! Integration tests for the provider callback endpoint.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{body_json, post_json, StubProvider};
use reelforge_providers::RawProviderResponse;

fn idle_provider() -> std::sync::Arc<StubProvider> {
    StubProvider::responding(RawProviderResponse::Json(json!({})))
}

#[tokio::test]
async fn callback_is_relayed_downstream() {
    let downstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/webhooks/modal"))
        .and(header("x-webhook-secret", "test-secret"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&downstream)
        .await;

    let app = common::build_test_app_with(idle_provider(), &downstream.uri());
    let response = post_json(
        app,
        "/api/v1/webhooks/provider",
        json!({"event": "generation.completed", "job_id": "job-7", "result": {"ok": true}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"received": true, "job_id": "job-7", "delivered": true}));
}

#[tokio::test]
async fn downstream_failure_still_acknowledges_provider() {
    let downstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&downstream)
        .await;

    let app = common::build_test_app_with(idle_provider(), &downstream.uri());
    let response = post_json(
        app,
        "/api/v1/webhooks/provider",
        json!({"event": "generation.failed", "job_id": "job-8"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["received"], true);
    assert_eq!(body["delivered"], false);
}
