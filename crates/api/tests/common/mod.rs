#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use reelforge_api::config::ServerConfig;
use reelforge_api::router::build_app_router;
use reelforge_api::state::AppState;
use reelforge_core::config::AppConfig;
use reelforge_events::CallbackRelay;
use reelforge_pipeline::JobInvoker;
use reelforge_providers::{
    ProviderAdapter, ProviderCall, ProviderError, ProviderSet, RawProviderResponse,
};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        service_name: "reelforge".to_string(),
        service_version: "0.0.0-test".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Stub provider
// ---------------------------------------------------------------------------

/// Provider that answers every call with a fixed response and records calls.
pub struct StubProvider {
    response: Result<RawProviderResponse, String>,
    calls: Mutex<Vec<ProviderCall>>,
}

impl StubProvider {
    pub fn responding(raw: RawProviderResponse) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(raw),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderAdapter for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn invoke(&self, call: &ProviderCall) -> Result<RawProviderResponse, ProviderError> {
        self.calls.lock().unwrap().push(call.clone());
        self.response
            .clone()
            .map_err(ProviderError::MalformedResponse)
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application with `provider` serving every capability and
/// callbacks relayed to `downstream_base`.
pub fn build_test_app_with(provider: Arc<StubProvider>, downstream_base: &str) -> Router {
    build_test_app_from(provider, downstream_base, test_config())
}

/// Like [`build_test_app_with`] but served under a caller-supplied `ServerConfig`.
pub fn build_test_app_from(
    provider: Arc<StubProvider>,
    downstream_base: &str,
    config: ServerConfig,
) -> Router {
    let downstream = downstream_base.to_string();
    let app_config = AppConfig::from_lookup(move |key| match key {
        "NEXT_PUBLIC_APP_URL" => Some(downstream.clone()),
        "MODAL_WEBHOOK_SECRET" => Some("test-secret".to_string()),
        "ELEVENLABS_DEFAULT_VOICE_ID" => Some("default-voice".to_string()),
        _ => None,
    })
    .unwrap();

    let adapter: Arc<dyn ProviderAdapter> = provider;
    let providers = ProviderSet::new(adapter.clone(), adapter.clone(), adapter);

    let state = AppState {
        config: Arc::new(config.clone()),
        invoker: Arc::new(JobInvoker::new(providers, &app_config)),
        relay: Arc::new(CallbackRelay::new(&app_config.relay).unwrap()),
    };

    build_app_router(state, &config)
}

/// Application whose provider returns an empty JSON body.
pub fn build_test_app() -> Router {
    build_test_app_with(
        StubProvider::responding(RawProviderResponse::Json(serde_json::json!({}))),
        "http://127.0.0.1:9",
    )
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
