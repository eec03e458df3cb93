use axum::routing::post;
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/scene", post(prompts::build_prompt))
}
