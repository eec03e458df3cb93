use std::sync::Arc;

use reelforge_events::CallbackRelay;
use reelforge_pipeline::JobInvoker;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (bind address, CORS, request timeout).
    pub config: Arc<ServerConfig>,
    /// Runs generation jobs against the configured providers.
    pub invoker: Arc<JobInvoker>,
    /// Forwards provider callbacks downstream.
    pub relay: Arc<CallbackRelay>,
}
