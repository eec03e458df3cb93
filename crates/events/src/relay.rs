//! Callback relay with optional exponential-backoff retry.
//!
//! [`CallbackRelay`] POSTs a JSON-encoded [`CallbackEvent`] to
//! `{downstream}/api/webhooks/modal`, authenticated with the shared secret
//! in the `X-Webhook-Secret` header. By default a single attempt is made;
//! a [`RelayPolicy`] with more attempts waits 1 s, 2 s, 4 s between them.
//! Delivery failures are logged and reported in the [`RelayOutcome`],
//! never returned as errors.

use std::time::Duration;

use reelforge_core::callback::{CallbackEvent, RelayOutcome};
use reelforge_core::config::{RelayConfig, MAX_RELAY_ATTEMPTS};

/// Path appended to the downstream base URL.
pub const RELAY_PATH: &str = "/api/webhooks/modal";

/// Header carrying the shared webhook secret.
pub const SECRET_HEADER: &str = "X-Webhook-Secret";

/// Backoff delays in seconds between consecutive attempts.
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Why a single delivery attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The downstream endpoint returned a non-2xx status code.
    #[error("Downstream webhook returned HTTP {0}")]
    HttpStatus(u16),
}

impl RelayError {
    /// Status code of the downstream response, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            RelayError::Request(e) => e.status().map(|s| s.as_u16()),
            RelayError::HttpStatus(code) => Some(*code),
        }
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// How many times one event may be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayPolicy {
    max_attempts: u32,
}

impl RelayPolicy {
    /// Clamped to `1..=MAX_RELAY_ATTEMPTS`.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.clamp(1, MAX_RELAY_ATTEMPTS),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait before attempt number `attempt` (1-based), if any.
    fn delay_before(&self, attempt: u32) -> Option<Duration> {
        if attempt <= 1 {
            return None;
        }
        RETRY_DELAYS_SECS
            .get((attempt - 2) as usize)
            .map(|secs| Duration::from_secs(*secs))
    }
}

impl Default for RelayPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}

// ---------------------------------------------------------------------------
// CallbackRelay
// ---------------------------------------------------------------------------

/// Forwards provider callbacks to the downstream application.
///
/// Holds only immutable configuration; share one instance behind an `Arc`.
pub struct CallbackRelay {
    client: reqwest::Client,
    endpoint: String,
    secret: String,
    policy: RelayPolicy,
}

impl CallbackRelay {
    /// Build a relay with a pre-configured HTTP client.
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.downstream_base_url, RELAY_PATH),
            secret: config.webhook_secret.clone(),
            policy: RelayPolicy::new(config.max_attempts),
        })
    }

    pub fn with_policy(mut self, policy: RelayPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Full URL events are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn policy(&self) -> RelayPolicy {
        self.policy
    }

    /// Forward `event` downstream.
    ///
    /// Returns as soon as one attempt succeeds. The outcome records the
    /// last status seen and how many attempts were made.
    pub async fn relay(&self, event: &CallbackEvent) -> RelayOutcome {
        let payload = serde_json::json!({
            "event": event.event,
            "job_id": event.job_id,
            "result": event.result,
        });

        let mut status = None;
        let mut attempts = 0;

        for attempt in 1..=self.policy.max_attempts {
            if let Some(delay) = self.policy.delay_before(attempt) {
                tokio::time::sleep(delay).await;
            }
            attempts = attempt;

            match self.try_send(&payload).await {
                Ok(code) => {
                    tracing::info!(
                        job_id = %event.job_id,
                        event = %event.event,
                        attempt,
                        status = code,
                        "Callback relayed downstream",
                    );
                    return RelayOutcome {
                        delivered: true,
                        status: Some(code),
                        job_id: event.job_id.clone(),
                        attempts,
                    };
                }
                Err(e) => {
                    status = e.status().or(status);
                    tracing::warn!(
                        job_id = %event.job_id,
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        url = %self.endpoint,
                        error = %e,
                        "Callback relay attempt failed",
                    );
                }
            }
        }

        tracing::error!(
            job_id = %event.job_id,
            attempts,
            url = %self.endpoint,
            "Callback relay gave up",
        );

        RelayOutcome {
            delivered: false,
            status,
            job_id: event.job_id.clone(),
            attempts,
        }
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, payload: &serde_json::Value) -> Result<u16, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(SECRET_HEADER, &self.secret)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::HttpStatus(status.as_u16()));
        }
        Ok(status.as_u16())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str, attempts: u32) -> RelayConfig {
        RelayConfig {
            downstream_base_url: base.to_string(),
            webhook_secret: "s".to_string(),
            max_attempts: attempts,
        }
    }

    #[test]
    fn endpoint_appends_webhook_path() {
        let relay = CallbackRelay::new(&config("https://app.example.com", 1)).unwrap();
        assert_eq!(relay.endpoint(), "https://app.example.com/api/webhooks/modal");
    }

    #[test]
    fn policy_is_clamped() {
        assert_eq!(RelayPolicy::new(0).max_attempts(), 1);
        assert_eq!(RelayPolicy::new(99).max_attempts(), MAX_RELAY_ATTEMPTS);
        assert_eq!(RelayPolicy::default().max_attempts(), 1);
    }

    #[test]
    fn backoff_schedule() {
        let policy = RelayPolicy::new(4);
        assert_eq!(policy.delay_before(1), None);
        assert_eq!(policy.delay_before(2), Some(Duration::from_secs(1)));
        assert_eq!(policy.delay_before(3), Some(Duration::from_secs(2)));
        assert_eq!(policy.delay_before(4), Some(Duration::from_secs(4)));
    }

    #[test]
    fn relay_error_display_http_status() {
        let err = RelayError::HttpStatus(502);
        assert_eq!(err.to_string(), "Downstream webhook returned HTTP 502");
        assert_eq!(err.status(), Some(502));
    }
}
