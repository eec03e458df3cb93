//! Inbound provider completion callbacks.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use reelforge_core::callback::CallbackEvent;
use reelforge_core::types::JobId;

use crate::state::AppState;

/// Acknowledgement returned to the provider.
#[derive(Debug, Serialize)]
pub struct CallbackReceipt {
    pub received: bool,
    pub job_id: JobId,
    /// Whether the downstream application accepted the relayed event.
    pub delivered: bool,
}

/// POST /webhooks/provider -- relay the event and acknowledge receipt.
///
/// The provider always gets 200 once the body parses; downstream failures
/// are reported in `delivered` and logged by the relay.
pub async fn provider_callback(
    State(state): State<AppState>,
    Json(event): Json<CallbackEvent>,
) -> Json<CallbackReceipt> {
    tracing::info!(job_id = %event.job_id, event = %event.event, "Provider callback received");

    let outcome = state.relay.relay(&event).await;

    Json(CallbackReceipt {
        received: true,
        job_id: outcome.job_id,
        delivered: outcome.delivered,
    })
}
