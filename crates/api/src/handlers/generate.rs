//! Handlers for the generation endpoints.
//!
//! Each handler rejects empty required fields with 400 and otherwise always
//! answers 200 with a `GenerationResult`, successful or not.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use reelforge_core::catalog::resolve_camera_movement;
use reelforge_core::generation::{SpeechRequest, StoryboardRequest, VideoRequest};
use reelforge_core::result::GenerationResult;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /generate/storyboard
// ---------------------------------------------------------------------------

pub async fn generate_storyboard(
    State(state): State<AppState>,
    Json(body): Json<StoryboardRequest>,
) -> AppResult<Json<GenerationResult>> {
    body.validate()?;
    Ok(Json(state.invoker.storyboard(&body).await))
}

// ---------------------------------------------------------------------------
// POST /generate/video
// ---------------------------------------------------------------------------

/// A `camera_movement` naming a preset is expanded to the preset's prompt
/// text before the job is submitted.
pub async fn generate_video(
    State(state): State<AppState>,
    Json(mut body): Json<VideoRequest>,
) -> AppResult<Json<GenerationResult>> {
    body.validate()?;
    body.camera_movement = body
        .camera_movement
        .as_deref()
        .map(resolve_camera_movement);
    Ok(Json(state.invoker.video(&body).await))
}

// ---------------------------------------------------------------------------
// POST /generate/speech
// ---------------------------------------------------------------------------

pub async fn generate_speech(
    State(state): State<AppState>,
    Json(body): Json<SpeechRequest>,
) -> AppResult<Json<GenerationResult>> {
    body.validate()?;
    Ok(Json(state.invoker.speech(&body).await))
}
