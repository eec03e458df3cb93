//! Route definitions for generation jobs.
//!
//! Mounted at `/generate`.
//!
//! ```text
//! POST /storyboard    generate_storyboard
//! POST /video         generate_video
//! POST /speech        generate_speech
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/storyboard", post(generate::generate_storyboard))
        .route("/video", post(generate::generate_video))
        .route("/speech", post(generate::generate_speech))
}
