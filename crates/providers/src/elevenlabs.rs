//! REST adapter for ElevenLabs text-to-speech.

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use reelforge_core::config::ElevenLabsConfig;
use reelforge_core::generation::Capability;

use crate::adapter::ProviderAdapter;
use crate::arguments::ProviderCall;
use crate::error::ProviderError;
use crate::http::{endpoint, ensure_success, path_segment};
use crate::response::RawProviderResponse;

const PROVIDER_NAME: &str = "elevenlabs";
const API_KEY_HEADER: &str = "xi-api-key";

pub struct ElevenLabsAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsAdapter {
    pub fn new(config: &ElevenLabsConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &ElevenLabsConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for ElevenLabsAdapter {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// `POST {base}/v1/text-to-speech/{voice_id}`; the voice travels in the
    /// path as a single escaped segment, every other argument in the JSON body. The whole audio stream
    /// is collected before returning.
    async fn invoke(&self, call: &ProviderCall) -> Result<RawProviderResponse, ProviderError> {
        if call.capability != Capability::SpeechSynthesis {
            return Err(ProviderError::Unsupported {
                provider: PROVIDER_NAME,
                capability: call.capability,
            });
        }

        let voice_id = call
            .voice_id()
            .ok_or(ProviderError::MissingArgument("voice_id"))?;
        let url = endpoint(
            &self.base_url,
            ["v1", "text-to-speech", path_segment("voice_id", voice_id)?],
        )?;
        let body = call.arguments.without(&["voice_id"]);

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let audio = response.bytes().await?;

        tracing::debug!(voice_id, bytes = audio.len(), "ElevenLabs audio received");
        Ok(RawProviderResponse::Audio(audio.to_vec()))
    }
}
