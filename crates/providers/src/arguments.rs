//! Provider call arguments and the per-capability call builders.
//!
//! Builders apply the request policy before anything leaves the process:
//! only the first actor reference is forwarded, clip length is clamped, and
//! a missing voice is replaced by the configured default. Optional fields
//! that are unset are left out of the argument map entirely.

use serde::Serialize;
use serde_json::{json, Map, Value};

use reelforge_core::generation::{
    clamp_duration, Capability, SpeechRequest, StoryboardRequest, VideoRequest,
};
use reelforge_core::types::ModelId;

/// Named parameters sent to a provider, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProviderArguments(Map<String, Value>);

impl ProviderArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Insert `value` only if it is present and non-empty.
    pub fn with_optional(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.0.insert(key.to_string(), Value::String(v.to_string()));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copy of the arguments with `keys` removed.
    pub fn without(&self, keys: &[&str]) -> Self {
        let mut map = self.0.clone();
        for key in keys {
            map.remove(*key);
        }
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// One fully-prepared provider invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCall {
    pub capability: Capability,
    pub model: ModelId,
    pub arguments: ProviderArguments,
}

impl ProviderCall {
    pub fn storyboard(request: &StoryboardRequest) -> Self {
        let arguments = ProviderArguments::new()
            .with("prompt", request.prompt.as_str())
            .with("resolution", request.resolution.as_str())
            .with("aspect_ratio", request.aspect_ratio.as_str())
            .with_optional(
                "image_reference",
                request.actor_refs.first().map(String::as_str),
            );

        Self {
            capability: Capability::ImageGeneration,
            model: request.model.clone(),
            arguments,
        }
    }

    pub fn video(request: &VideoRequest) -> Self {
        let arguments = ProviderArguments::new()
            .with("image_url", request.image_url.as_str())
            .with("duration", clamp_duration(request.duration))
            .with_optional("camera_movement", request.camera_movement.as_deref())
            .with_optional("audio_prompt", request.audio_prompt.as_deref());

        Self {
            capability: Capability::VideoGeneration,
            model: request.model.clone(),
            arguments,
        }
    }

    /// `default_voice_id` is used when the request names no voice.
    pub fn speech(request: &SpeechRequest, default_voice_id: &str) -> Self {
        let voice_id = request
            .voice_id
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(default_voice_id);

        let arguments = ProviderArguments::new()
            .with("text", request.text.as_str())
            .with("voice_id", voice_id)
            .with("model_id", request.model.as_str())
            .with(
                "voice_settings",
                json!({
                    "stability": request.stability,
                    "similarity_boost": request.similarity_boost,
                    "style": request.style,
                }),
            );

        Self {
            capability: Capability::SpeechSynthesis,
            model: request.model.clone(),
            arguments,
        }
    }

    /// Voice the call will be synthesized with, if this is a speech call.
    pub fn voice_id(&self) -> Option<&str> {
        self.arguments.get_str("voice_id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storyboard_forwards_only_first_actor_ref() {
        let request = StoryboardRequest::new("a duel at dusk").with_actor_refs(vec![
            "https://x/a.png".into(),
            "https://x/b.png".into(),
            "https://x/c.png".into(),
        ]);

        let call = ProviderCall::storyboard(&request);

        assert_eq!(call.arguments.get_str("image_reference"), Some("https://x/a.png"));
        let serialized = serde_json::to_string(&call.arguments).unwrap();
        assert!(!serialized.contains("b.png"));
        assert!(!serialized.contains("c.png"));
    }

    #[test]
    fn storyboard_without_refs_omits_reference() {
        let call = ProviderCall::storyboard(&StoryboardRequest::new("a duel at dusk"));
        assert!(!call.arguments.contains("image_reference"));
        assert_eq!(call.arguments.get_str("resolution"), Some("2K"));
        assert_eq!(call.arguments.get_str("aspect_ratio"), Some("16:9"));
        assert_eq!(call.capability, Capability::ImageGeneration);
    }

    #[test]
    fn storyboard_skips_empty_first_ref() {
        let request = StoryboardRequest::new("p").with_actor_refs(vec![String::new()]);
        assert!(!ProviderCall::storyboard(&request).arguments.contains("image_reference"));
    }

    #[test]
    fn video_duration_is_clamped() {
        let call = ProviderCall::video(&VideoRequest::new("https://x/1.png").with_duration(15));
        assert_eq!(call.arguments.get("duration"), Some(&json!(10)));
    }

    #[test]
    fn video_short_duration_untouched() {
        let call = ProviderCall::video(&VideoRequest::new("https://x/1.png").with_duration(7));
        assert_eq!(call.arguments.get("duration"), Some(&json!(7)));
    }

    #[test]
    fn video_omits_unset_optionals() {
        let call = ProviderCall::video(&VideoRequest::new("https://x/1.png"));
        assert!(!call.arguments.contains("camera_movement"));
        assert!(!call.arguments.contains("audio_prompt"));

        let call = ProviderCall::video(
            &VideoRequest::new("https://x/1.png")
                .with_camera_movement("dolly in")
                .with_audio_prompt(""),
        );
        assert_eq!(call.arguments.get_str("camera_movement"), Some("dolly in"));
        assert!(!call.arguments.contains("audio_prompt"));
    }

    #[test]
    fn speech_uses_default_voice_when_missing() {
        let call = ProviderCall::speech(&SpeechRequest::new("Dobrý deň"), "default-voice");
        assert_eq!(call.voice_id(), Some("default-voice"));
    }

    #[test]
    fn speech_uses_default_voice_when_empty() {
        let call = ProviderCall::speech(&SpeechRequest::new("x").with_voice_id(""), "default-voice");
        assert_eq!(call.voice_id(), Some("default-voice"));
    }

    #[test]
    fn speech_keeps_explicit_voice_and_settings() {
        let mut request = SpeechRequest::new("x").with_voice_id("v-1");
        request.stability = 1.7;

        let call = ProviderCall::speech(&request, "default-voice");

        assert_eq!(call.voice_id(), Some("v-1"));
        assert_eq!(call.arguments.get_str("model_id"), Some("eleven_multilingual_v2"));
        let settings = call.arguments.get("voice_settings").unwrap();
        assert_eq!(settings["stability"], json!(1.7));
        assert_eq!(settings["similarity_boost"], json!(0.8));
        assert_eq!(settings["style"], json!(0.6));
        assert!(!call.arguments.contains("aspect_ratio"));
    }

    #[test]
    fn without_removes_keys() {
        let args = ProviderArguments::new().with("a", 1).with("b", 2);
        let trimmed = args.without(&["a"]);
        assert!(!trimmed.contains("a"));
        assert!(trimmed.contains("b"));
        assert!(args.contains("a"));
    }
}
