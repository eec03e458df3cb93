//! REST adapter for the Higgsfield platform (image and video generation).
//!
//! A job is submitted with `POST {base}/{model}` and then polled with
//! `GET {base}/requests/{request_id}/status` until it reaches a terminal
//! status. The completed status body is returned untouched. Polling stops
//! as soon as the caller drops the future, which is how deadlines cancel
//! an in-flight job on our side.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use reelforge_core::config::HiggsfieldConfig;
use reelforge_core::generation::Capability;

use crate::adapter::ProviderAdapter;
use crate::arguments::{ProviderArguments, ProviderCall};
use crate::error::ProviderError;
use crate::http::{endpoint, parse_json, path_segment};
use crate::response::RawProviderResponse;

const PROVIDER_NAME: &str = "higgsfield";

const STATUS_COMPLETED: &str = "completed";
/// Terminal statuses that mean the job produced nothing usable.
const FAILED_STATUSES: &[&str] = &["failed", "nsfw", "canceled", "cancelled"];

/// HTTP client for the Higgsfield platform API.
pub struct HiggsfieldAdapter {
    client: reqwest::Client,
    base_url: String,
    authorization: String,
    poll_interval: Duration,
}

impl HiggsfieldAdapter {
    pub fn new(config: &HiggsfieldConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create an adapter reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &HiggsfieldConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            authorization: format!("Key {}:{}", config.api_key, config.api_secret),
            poll_interval: config.poll_interval,
        }
    }

    /// Queue a job for `model`. Returns the submit response body.
    ///
    /// Model ids are slash-separated paths; each part is escaped on its own.
    async fn submit(&self, model: &str, arguments: &ProviderArguments) -> Result<Value, ProviderError> {
        let segments = model
            .split('/')
            .map(|part| path_segment("model", part))
            .collect::<Result<Vec<_>, _>>()?;
        let url = endpoint(&self.base_url, segments)?;

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, &self.authorization)
            .json(arguments)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn status(&self, request_id: &str) -> Result<Value, ProviderError> {
        let response = self
            .client
            .get(endpoint(
                &self.base_url,
                ["requests", path_segment("request_id", request_id)?, "status"],
            )?)
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await?;

        parse_json(response).await
    }

    /// Poll until the job completes or fails.
    async fn wait_for_completion(&self, request_id: &str, mut body: Value) -> Result<Value, ProviderError> {
        loop {
            let status = body
                .get("status")
                .and_then(Value::as_str)
                .map(str::to_ascii_lowercase);

            match status.as_deref() {
                Some(STATUS_COMPLETED) => return Ok(body),
                Some(s) if FAILED_STATUSES.contains(&s) => {
                    return Err(ProviderError::JobFailed {
                        request_id: request_id.to_string(),
                        status: s.to_string(),
                    });
                }
                Some(s) => {
                    tracing::debug!(request_id, status = s, "Higgsfield job not finished yet");
                }
                None => {
                    tracing::debug!(request_id, "Higgsfield job has no status yet");
                }
            }

            tokio::time::sleep(self.poll_interval).await;
            body = self.status(request_id).await?;
        }
    }
}

#[async_trait]
impl ProviderAdapter for HiggsfieldAdapter {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn invoke(&self, call: &ProviderCall) -> Result<RawProviderResponse, ProviderError> {
        if call.capability == Capability::SpeechSynthesis {
            return Err(ProviderError::Unsupported {
                provider: PROVIDER_NAME,
                capability: call.capability,
            });
        }

        let submitted = self.submit(&call.model, &call.arguments).await?;
        let request_id = submitted
            .get("request_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or(ProviderError::MissingField { field: "request_id" })?;

        tracing::info!(
            request_id = %request_id,
            model = %call.model,
            capability = %call.capability,
            "Higgsfield job submitted",
        );

        let completed = self.wait_for_completion(&request_id, submitted).await?;
        Ok(RawProviderResponse::Json(completed))
    }
}
