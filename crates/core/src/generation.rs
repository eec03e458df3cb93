//! Generation requests, capability policy, and job lifecycle states.
//!
//! Request defaults mirror the caller-facing contract: omitted options are
//! filled in at deserialization time so every downstream layer sees a
//! fully-populated request.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::types::ModelId;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default storyboard image resolution.
pub const DEFAULT_RESOLUTION: &str = "2K";
/// Default storyboard aspect ratio.
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";
/// Default image-generation model.
pub const DEFAULT_IMAGE_MODEL: &str = "bytedance/seedream/v4/text-to-image";

/// Default video-generation model.
pub const DEFAULT_VIDEO_MODEL: &str = "kuaishou/kling-2.6";
/// Default requested clip length in seconds.
pub const DEFAULT_VIDEO_DURATION_SECS: i64 = 5;
/// Hard ceiling on the clip length submitted to the provider.
pub const MAX_VIDEO_DURATION_SECS: u32 = 10;

/// Default speech-synthesis model.
pub const DEFAULT_SPEECH_MODEL: &str = "eleven_multilingual_v2";
pub const DEFAULT_STABILITY: f64 = 0.5;
pub const DEFAULT_SIMILARITY_BOOST: f64 = 0.8;
pub const DEFAULT_STYLE: f64 = 0.6;

fn default_resolution() -> String {
    DEFAULT_RESOLUTION.to_string()
}

fn default_aspect_ratio() -> String {
    DEFAULT_ASPECT_RATIO.to_string()
}

fn default_image_model() -> ModelId {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_video_model() -> ModelId {
    DEFAULT_VIDEO_MODEL.to_string()
}

fn default_video_duration() -> i64 {
    DEFAULT_VIDEO_DURATION_SECS
}

fn default_speech_model() -> ModelId {
    DEFAULT_SPEECH_MODEL.to_string()
}

fn default_stability() -> f64 {
    DEFAULT_STABILITY
}

fn default_similarity_boost() -> f64 {
    DEFAULT_SIMILARITY_BOOST
}

fn default_style() -> f64 {
    DEFAULT_STYLE
}

/// Clamp a requested clip length into `0..=MAX_VIDEO_DURATION_SECS`.
///
/// Out-of-range requests are shortened, never rejected.
pub fn clamp_duration(requested: i64) -> u32 {
    // In range after the clamp, so the cast cannot truncate.
    requested.clamp(0, i64::from(MAX_VIDEO_DURATION_SECS)) as u32
}

/// Accept any JSON number as a duration, saturating at the `i64` bounds.
/// Fractional values are truncated toward zero.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    Ok(number
        .as_i64()
        .or_else(|| number.as_u64().map(|_| i64::MAX))
        .or_else(|| number.as_f64().map(|f| f as i64))
        .unwrap_or(DEFAULT_VIDEO_DURATION_SECS))
}

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// A remote generation capability offered by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ImageGeneration,
    VideoGeneration,
    SpeechSynthesis,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::ImageGeneration,
        Capability::VideoGeneration,
        Capability::SpeechSynthesis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ImageGeneration => "image_generation",
            Capability::VideoGeneration => "video_generation",
            Capability::SpeechSynthesis => "speech_synthesis",
        }
    }

    /// Wall-clock budget for one invocation of this capability.
    pub fn default_deadline(&self) -> Duration {
        match self {
            Capability::ImageGeneration => Duration::from_secs(300),
            Capability::VideoGeneration => Duration::from_secs(600),
            Capability::SpeechSynthesis => Duration::from_secs(120),
        }
    }

    /// Whether the provider job must be scheduled on GPU-class compute.
    pub fn requires_gpu(&self) -> bool {
        matches!(self, Capability::VideoGeneration)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Generate a single storyboard still from a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StoryboardRequest {
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,
    /// Actor/character reference image URLs. Only the first is forwarded.
    #[serde(default)]
    pub actor_refs: Vec<String>,
    #[serde(default = "default_resolution")]
    pub resolution: String,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    #[serde(default = "default_image_model")]
    pub model: ModelId,
}

impl StoryboardRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            actor_refs: Vec::new(),
            resolution: default_resolution(),
            aspect_ratio: default_aspect_ratio(),
            model: default_image_model(),
        }
    }

    pub fn with_actor_refs(mut self, refs: Vec<String>) -> Self {
        self.actor_refs = refs;
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = resolution.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Animate a storyboard still into a short clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VideoRequest {
    #[validate(length(min = 1, message = "image_url must not be empty"))]
    pub image_url: String,
    #[serde(default)]
    pub camera_movement: Option<String>,
    /// Requested length in seconds, kept as sent so it can be echoed back.
    /// Only the clamped value reaches the provider.
    #[serde(
        default = "default_video_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub duration: i64,
    #[serde(default = "default_video_model")]
    pub model: ModelId,
    #[serde(default)]
    pub audio_prompt: Option<String>,
}

impl VideoRequest {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            camera_movement: None,
            duration: default_video_duration(),
            model: default_video_model(),
            audio_prompt: None,
        }
    }

    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_camera_movement(mut self, movement: impl Into<String>) -> Self {
        self.camera_movement = Some(movement.into());
        self
    }

    pub fn with_audio_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.audio_prompt = Some(prompt.into());
        self
    }
}

/// Synthesize speech from text.
///
/// The voice controls are pass-through; range checking is left to the
/// provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SpeechRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
    #[serde(default)]
    pub voice_id: Option<String>,
    #[serde(default = "default_speech_model")]
    pub model: ModelId,
    #[serde(default = "default_stability")]
    pub stability: f64,
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f64,
    #[serde(default = "default_style")]
    pub style: f64,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: None,
            model: default_speech_model(),
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            style: default_style(),
        }
    }

    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }
}

/// One unit of generation work, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationRequest {
    Storyboard(StoryboardRequest),
    Video(VideoRequest),
    Speech(SpeechRequest),
}

impl GenerationRequest {
    pub fn capability(&self) -> Capability {
        match self {
            GenerationRequest::Storyboard(_) => Capability::ImageGeneration,
            GenerationRequest::Video(_) => Capability::VideoGeneration,
            GenerationRequest::Speech(_) => Capability::SpeechSynthesis,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            GenerationRequest::Storyboard(r) => &r.model,
            GenerationRequest::Video(r) => &r.model,
            GenerationRequest::Speech(r) => &r.model,
        }
    }
}

impl From<StoryboardRequest> for GenerationRequest {
    fn from(request: StoryboardRequest) -> Self {
        GenerationRequest::Storyboard(request)
    }
}

impl From<VideoRequest> for GenerationRequest {
    fn from(request: VideoRequest) -> Self {
        GenerationRequest::Video(request)
    }
}

impl From<SpeechRequest> for GenerationRequest {
    fn from(request: SpeechRequest) -> Self {
        GenerationRequest::Speech(request)
    }
}

// ---------------------------------------------------------------------------
// Job lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle of a single invocation. `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Succeeded | JobState::Failed)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobState::Idle => "idle",
            JobState::Running => "running",
            JobState::Succeeded => "succeeded",
            JobState::Failed => "failed",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
