pub mod catalog;
pub mod generate;
pub mod health;
pub mod prompts;
pub mod webhooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate/storyboard                  storyboard still (POST)
/// /generate/video                       image-to-video clip (POST)
/// /generate/speech                      text-to-speech (POST)
///
/// /webhooks/provider                    provider completion callback (POST)
///
/// /catalog/models                       model catalog (?capability=)
/// /catalog/camera-movements             camera presets (?category=)
///
/// /prompts/scene                        scene prompt builder (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/generate", generate::router())
        .nest("/webhooks", webhooks::router())
        .nest("/catalog", catalog::router())
        .nest("/prompts", prompts::router())
}
