//! Scene prompt builder endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

use reelforge_core::catalog::resolve_camera_movement;
use reelforge_core::prompt::{build_scene_prompt, ActorDescription, SceneDescription};

use crate::response::DataResponse;

/// Request body for building a scene prompt.
#[derive(Debug, Deserialize)]
pub struct ScenePromptRequest {
    pub scene: SceneDescription,
    #[serde(default)]
    pub actors: Vec<ActorDescription>,
    /// Preset id or free-form camera direction.
    pub camera_movement: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScenePrompt {
    pub prompt: String,
}

/// POST /prompts/scene
pub async fn build_prompt(Json(body): Json<ScenePromptRequest>) -> Json<DataResponse<ScenePrompt>> {
    let camera = body.camera_movement.as_deref().map(resolve_camera_movement);
    let prompt = build_scene_prompt(&body.scene, &body.actors, camera.as_deref());

    Json(DataResponse {
        data: ScenePrompt { prompt },
    })
}
