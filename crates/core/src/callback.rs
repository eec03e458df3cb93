//! Asynchronous completion events and their relay outcome.

use serde::{Deserialize, Serialize};

use crate::types::JobId;

/// Completion notification pushed by a provider, out-of-band from the
/// original request. Lives only for the duration of one relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackEvent {
    /// Provider-defined event name, e.g. `"generation.completed"`.
    pub event: String,
    pub job_id: JobId,
    /// Provider-defined result body, forwarded verbatim.
    #[serde(default)]
    pub result: serde_json::Value,
}

impl CallbackEvent {
    pub fn new(event: impl Into<String>, job_id: impl Into<JobId>) -> Self {
        Self {
            event: event.into(),
            job_id: job_id.into(),
            result: serde_json::Value::Null,
        }
    }

    pub fn with_result(mut self, result: serde_json::Value) -> Self {
        self.result = result;
        self
    }
}

/// Diagnostic summary of one relay call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayOutcome {
    pub delivered: bool,
    /// HTTP status of the last downstream response, if one was received.
    pub status: Option<u16>,
    pub job_id: JobId,
    pub attempts: u32,
}
