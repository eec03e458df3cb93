use std::sync::Arc;

use async_trait::async_trait;

use reelforge_core::config::AppConfig;
use reelforge_core::generation::Capability;

use crate::arguments::ProviderCall;
use crate::elevenlabs::ElevenLabsAdapter;
use crate::error::ProviderError;
use crate::higgsfield::HiggsfieldAdapter;
use crate::response::RawProviderResponse;

/// Uniform interface over one external generation service.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Short provider name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Submit `call` and return the provider's response untouched.
    async fn invoke(&self, call: &ProviderCall) -> Result<RawProviderResponse, ProviderError>;
}

/// The adapter serving each capability.
#[derive(Clone)]
pub struct ProviderSet {
    pub image: Arc<dyn ProviderAdapter>,
    pub video: Arc<dyn ProviderAdapter>,
    pub speech: Arc<dyn ProviderAdapter>,
}

impl ProviderSet {
    pub fn new(
        image: Arc<dyn ProviderAdapter>,
        video: Arc<dyn ProviderAdapter>,
        speech: Arc<dyn ProviderAdapter>,
    ) -> Self {
        Self {
            image,
            video,
            speech,
        }
    }

    /// Wire the production adapters, sharing one connection pool.
    pub fn from_config(config: &AppConfig) -> Self {
        let client = reqwest::Client::new();
        let higgsfield: Arc<dyn ProviderAdapter> = Arc::new(HiggsfieldAdapter::with_client(
            client.clone(),
            &config.higgsfield,
        ));
        let elevenlabs: Arc<dyn ProviderAdapter> =
            Arc::new(ElevenLabsAdapter::with_client(client, &config.elevenlabs));

        Self::new(Arc::clone(&higgsfield), higgsfield, elevenlabs)
    }

    pub fn for_capability(&self, capability: Capability) -> &Arc<dyn ProviderAdapter> {
        match capability {
            Capability::ImageGeneration => &self.image,
            Capability::VideoGeneration => &self.video,
            Capability::SpeechSynthesis => &self.speech,
        }
    }
}
