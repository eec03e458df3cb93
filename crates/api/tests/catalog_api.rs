//! Integration tests for catalog and prompt helper endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, get, post_json};

#[tokio::test]
async fn models_can_be_filtered_by_capability() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/catalog/models?capability=video_generation").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let models = body["data"]["models"].as_array().unwrap();
    assert!(!models.is_empty());
    assert!(models.iter().all(|m| m["capability"] == "video_generation"));

    let capabilities = body["data"]["capabilities"].as_array().unwrap();
    assert_eq!(capabilities.len(), 1);
    assert_eq!(capabilities[0]["deadline_secs"], 600);
    assert_eq!(capabilities[0]["requires_gpu"], true);
}

#[tokio::test]
async fn camera_movements_filter_by_category() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/catalog/camera-movements?category=DOLLY").await;

    let body = body_json(response).await;
    let movements = body["data"].as_array().unwrap();
    assert!(!movements.is_empty());
    assert!(movements.iter().all(|m| m["category"] == "DOLLY"));
}

#[tokio::test]
async fn scene_prompt_is_built() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/prompts/scene",
        json!({
            "scene": {"title": "Opening", "description": "A quiet harbor", "location": "Dock"},
            "actors": [{"name": "Mara", "age": 34}],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let prompt = body["data"]["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("A quiet harbor. Location: Dock"));
    assert!(prompt.contains("Mara"));
    assert!(prompt.contains("34 years old"));
}
