//! Mounted at `/webhooks`.

use axum::routing::post;
use axum::Router;

use crate::handlers::webhooks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/provider", post(webhooks::provider_callback))
}
