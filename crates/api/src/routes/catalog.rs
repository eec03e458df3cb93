//! Route definitions for static catalogs.
//!
//! Mounted at `/catalog`.
//!
//! ```text
//! GET /models              list_models
//! GET /camera-movements    list_camera_movements
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/models", get(catalog::list_models))
        .route("/camera-movements", get(catalog::list_camera_movements))
}
