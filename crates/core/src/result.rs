//! The uniform result contract returned for every generation job.
//!
//! A [`GenerationResult`] carries either a capability-specific payload or an
//! error message, never both. Fields are private so the only way to build
//! one is through [`GenerationResult::succeeded`] or
//! [`GenerationResult::failed`]; deserialization goes through the same
//! check and rejects bodies that break it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ModelId;

/// Fallback message used when a failure carries no text of its own.
const UNKNOWN_FAILURE: &str = "generation failed without an error message";

/// Capability-specific success payload, flattened into the result body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationPayload {
    Image {
        image_url: String,
    },
    Video {
        video_url: String,
        /// Duration as originally requested by the caller, before clamping.
        duration: i64,
    },
    Speech {
        audio_base64: String,
        character_count: usize,
        voice_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireGenerationResult")]
pub struct GenerationResult {
    success: bool,
    #[serde(flatten)]
    payload: Option<GenerationPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    model: ModelId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl GenerationResult {
    pub fn succeeded(model: impl Into<ModelId>, payload: GenerationPayload) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            error: None,
            model: model.into(),
            prompt: None,
            text: None,
        }
    }

    /// Build a failed result. An empty message is replaced so callers always
    /// have something to report.
    pub fn failed(model: impl Into<ModelId>, error: impl Into<String>) -> Self {
        let mut error = error.into();
        if error.trim().is_empty() {
            error = UNKNOWN_FAILURE.to_string();
        }
        Self {
            success: false,
            payload: None,
            error: Some(error),
            model: model.into(),
            prompt: None,
            text: None,
        }
    }

    /// Echo the storyboard prompt for traceability.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Echo the synthesized text for traceability.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn payload(&self) -> Option<&GenerationPayload> {
        self.payload.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Unchecked wire shape of a [`GenerationResult`].
#[derive(Deserialize)]
struct WireGenerationResult {
    success: bool,
    #[serde(flatten)]
    payload: Option<GenerationPayload>,
    #[serde(default)]
    error: Option<String>,
    model: ModelId,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl TryFrom<WireGenerationResult> for GenerationResult {
    type Error = CoreError;

    fn try_from(wire: WireGenerationResult) -> Result<Self, Self::Error> {
        let result = match (wire.success, wire.payload, wire.error) {
            (true, Some(payload), None) => Self::succeeded(wire.model, payload),
            (false, None, Some(error)) => Self::failed(wire.model, error),
            (true, None, _) => {
                return Err(CoreError::Validation(
                    "successful result has no payload".into(),
                ))
            }
            (true, Some(_), Some(_)) => {
                return Err(CoreError::Validation(
                    "successful result also carries an error".into(),
                ))
            }
            (false, Some(_), _) => {
                return Err(CoreError::Validation(
                    "failed result carries a payload".into(),
                ))
            }
            (false, None, None) => {
                return Err(CoreError::Validation(
                    "failed result has no error message".into(),
                ))
            }
        };

        Ok(Self {
            prompt: wire.prompt,
            text: wire.text,
            ..result
        })
    }
}
