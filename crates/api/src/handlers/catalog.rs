//! Read-only catalog endpoints: provider models and camera presets.

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use reelforge_core::catalog::{CameraCategory, CameraMovement, ModelInfo, CAMERA_MOVEMENTS, MODELS};
use reelforge_core::generation::Capability;

use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ModelFilter {
    pub capability: Option<Capability>,
}

#[derive(Debug, Deserialize)]
pub struct CameraFilter {
    pub category: Option<CameraCategory>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Execution policy for one capability.
#[derive(Debug, Serialize)]
pub struct CapabilityPolicy {
    pub capability: Capability,
    pub deadline_secs: u64,
    pub requires_gpu: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelCatalog {
    pub models: Vec<&'static ModelInfo>,
    pub capabilities: Vec<CapabilityPolicy>,
}

// ---------------------------------------------------------------------------
// GET /catalog/models
// ---------------------------------------------------------------------------

pub async fn list_models(Query(filter): Query<ModelFilter>) -> Json<DataResponse<ModelCatalog>> {
    let models = MODELS
        .iter()
        .filter(|m| filter.capability.map_or(true, |c| m.capability == c))
        .collect();

    let capabilities = Capability::ALL
        .into_iter()
        .filter(|c| filter.capability.map_or(true, |f| f == *c))
        .map(|capability| CapabilityPolicy {
            capability,
            deadline_secs: capability.default_deadline().as_secs(),
            requires_gpu: capability.requires_gpu(),
        })
        .collect();

    Json(DataResponse {
        data: ModelCatalog {
            models,
            capabilities,
        },
    })
}

// ---------------------------------------------------------------------------
// GET /catalog/camera-movements
// ---------------------------------------------------------------------------

pub async fn list_camera_movements(
    Query(filter): Query<CameraFilter>,
) -> Json<DataResponse<Vec<&'static CameraMovement>>> {
    let movements = CAMERA_MOVEMENTS
        .iter()
        .filter(|m| filter.category.map_or(true, |c| m.category == c))
        .collect();

    Json(DataResponse { data: movements })
}
