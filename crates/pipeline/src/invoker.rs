//! Deadline-bounded execution of a single generation job.
//!
//! Every entry point returns a [`GenerationResult`]; adapter errors,
//! malformed responses, deadline expiry and adapter panics all become a
//! failed result. The invoker never retries: generation is costly and a
//! repeat must be an explicit caller decision.

use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tokio::task::AbortHandle;
use uuid::Uuid;

use reelforge_core::config::AppConfig;
use reelforge_core::generation::{
    Capability, GenerationRequest, JobState, SpeechRequest, StoryboardRequest, VideoRequest,
};
use reelforge_core::result::{GenerationPayload, GenerationResult};
use reelforge_providers::{
    ImageResult, ProviderCall, ProviderError, ProviderSet, RawProviderResponse, SpeechResult,
    VideoResult,
};

/// Wall-clock budget per capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadlines {
    pub storyboard: Duration,
    pub video: Duration,
    pub speech: Duration,
}

impl Deadlines {
    /// Same deadline for every capability.
    pub fn uniform(deadline: Duration) -> Self {
        Self {
            storyboard: deadline,
            video: deadline,
            speech: deadline,
        }
    }

    pub fn for_capability(&self, capability: Capability) -> Duration {
        match capability {
            Capability::ImageGeneration => self.storyboard,
            Capability::VideoGeneration => self.video,
            Capability::SpeechSynthesis => self.speech,
        }
    }
}

impl Default for Deadlines {
    fn default() -> Self {
        Self {
            storyboard: Capability::ImageGeneration.default_deadline(),
            video: Capability::VideoGeneration.default_deadline(),
            speech: Capability::SpeechSynthesis.default_deadline(),
        }
    }
}

/// Aborts the provider task if the invoking future is dropped or times out.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs generation requests against the configured providers.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent jobs.
#[derive(Clone)]
pub struct JobInvoker {
    providers: ProviderSet,
    default_voice_id: String,
    deadlines: Deadlines,
}

impl JobInvoker {
    pub fn new(providers: ProviderSet, config: &AppConfig) -> Self {
        Self {
            providers,
            default_voice_id: config.elevenlabs.default_voice_id.clone(),
            deadlines: Deadlines::default(),
        }
    }

    pub fn with_deadlines(mut self, deadlines: Deadlines) -> Self {
        self.deadlines = deadlines;
        self
    }

    pub fn deadlines(&self) -> &Deadlines {
        &self.deadlines
    }

    pub async fn run(&self, request: &GenerationRequest) -> GenerationResult {
        match request {
            GenerationRequest::Storyboard(r) => self.storyboard(r).await,
            GenerationRequest::Video(r) => self.video(r).await,
            GenerationRequest::Speech(r) => self.speech(r).await,
        }
    }

    pub async fn storyboard(&self, request: &StoryboardRequest) -> GenerationResult {
        let call = ProviderCall::storyboard(request);
        let result = match self.execute::<ImageResult>(call).await {
            Ok(image) => GenerationResult::succeeded(
                &request.model,
                GenerationPayload::Image {
                    image_url: image.url,
                },
            ),
            Err(message) => GenerationResult::failed(&request.model, message),
        };
        result.with_prompt(&request.prompt)
    }

    /// The result echoes the duration the caller asked for, not the clamped
    /// value that was submitted.
    pub async fn video(&self, request: &VideoRequest) -> GenerationResult {
        let call = ProviderCall::video(request);
        match self.execute::<VideoResult>(call).await {
            Ok(video) => GenerationResult::succeeded(
                &request.model,
                GenerationPayload::Video {
                    video_url: video.video_url,
                    duration: request.duration,
                },
            ),
            Err(message) => GenerationResult::failed(&request.model, message),
        }
    }

    pub async fn speech(&self, request: &SpeechRequest) -> GenerationResult {
        let call = ProviderCall::speech(request, &self.default_voice_id);
        let voice_id = call.voice_id().unwrap_or(&self.default_voice_id).to_string();

        let result = match self.execute::<SpeechResult>(call).await {
            Ok(speech) => GenerationResult::succeeded(
                &request.model,
                GenerationPayload::Speech {
                    audio_base64: STANDARD.encode(&speech.audio),
                    character_count: request.text.chars().count(),
                    voice_id,
                },
            ),
            Err(message) => GenerationResult::failed(&request.model, message),
        };
        result.with_text(&request.text)
    }

    /// Invoke the adapter for `call` under its deadline and extract `T`.
    ///
    /// The adapter runs on its own task so that a panic inside it is
    /// reported as a failure rather than unwinding into the caller.
    async fn execute<T>(&self, call: ProviderCall) -> Result<T, String>
    where
        T: TryFrom<RawProviderResponse, Error = ProviderError>,
    {
        let job_id = Uuid::new_v4();
        let capability = call.capability;
        let deadline = self.deadlines.for_capability(capability);
        let adapter = std::sync::Arc::clone(self.providers.for_capability(capability));
        let provider = adapter.name();
        let model = call.model.clone();

        tracing::info!(
            %job_id,
            %capability,
            %model,
            provider,
            requires_gpu = capability.requires_gpu(),
            deadline_ms = deadline.as_millis() as u64,
            state = %JobState::Running,
            "Generation job started",
        );

        let started = Instant::now();
        let mut handle = tokio::spawn(async move { adapter.invoke(&call).await });
        let _abort = AbortOnDrop(handle.abort_handle());

        let outcome = match tokio::time::timeout(deadline, &mut handle).await {
            Ok(Ok(Ok(raw))) => T::try_from(raw).map_err(|e| e.to_string()),
            Ok(Ok(Err(e))) => Err(e.to_string()),
            Ok(Err(join_err)) if join_err.is_panic() => {
                Err(format!("{provider} adapter panicked during {capability}"))
            }
            Ok(Err(join_err)) => Err(format!("{provider} adapter task failed: {join_err}")),
            Err(_elapsed) => Err(format!("{capability} timed out after {deadline:?}")),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &outcome {
            Ok(_) => tracing::info!(
                %job_id,
                %capability,
                %model,
                elapsed_ms,
                state = %JobState::Succeeded,
                "Generation job succeeded",
            ),
            Err(error) => tracing::warn!(
                %job_id,
                %capability,
                %model,
                elapsed_ms,
                state = %JobState::Failed,
                error = %error,
                "Generation job failed",
            ),
        }

        outcome
    }
}
