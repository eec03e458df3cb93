//! Raw provider responses and their typed, per-capability views.
//!
//! Providers return loosely-shaped bodies. Conversion into [`ImageResult`],
//! [`VideoResult`] or [`SpeechResult`] fails with
//! [`ProviderError::MissingField`] as soon as the expected field is absent.

use serde_json::Value;

use crate::error::ProviderError;

/// A provider response exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub enum RawProviderResponse {
    Json(Value),
    Audio(Vec<u8>),
}

impl RawProviderResponse {
    fn into_json(self) -> Result<Value, ProviderError> {
        match self {
            RawProviderResponse::Json(value) => Ok(value),
            RawProviderResponse::Audio(bytes) => Err(ProviderError::MalformedResponse(format!(
                "expected a JSON body, got {} bytes of audio",
                bytes.len()
            ))),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Result of an image-generation job: the first generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub url: String,
}

impl TryFrom<RawProviderResponse> for ImageResult {
    type Error = ProviderError;

    fn try_from(raw: RawProviderResponse) -> Result<Self, Self::Error> {
        let body = raw.into_json()?;
        let url = non_empty_str(body.pointer("/images/0/url"))
            .ok_or(ProviderError::MissingField { field: "images[0].url" })?;
        Ok(Self { url })
    }
}

/// Result of a video-generation job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResult {
    pub video_url: String,
}

impl TryFrom<RawProviderResponse> for VideoResult {
    type Error = ProviderError;

    /// Reads `video_url`, falling back to a nested `video.url`.
    fn try_from(raw: RawProviderResponse) -> Result<Self, Self::Error> {
        let body = raw.into_json()?;
        let video_url = non_empty_str(body.get("video_url"))
            .or_else(|| non_empty_str(body.pointer("/video/url")))
            .ok_or(ProviderError::MissingField { field: "video_url" })?;
        Ok(Self { video_url })
    }
}

/// Result of a speech-synthesis job: the complete audio stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResult {
    pub audio: Vec<u8>,
}

impl TryFrom<RawProviderResponse> for SpeechResult {
    type Error = ProviderError;

    fn try_from(raw: RawProviderResponse) -> Result<Self, Self::Error> {
        match raw {
            RawProviderResponse::Audio(audio) if !audio.is_empty() => Ok(Self { audio }),
            RawProviderResponse::Audio(_) => Err(ProviderError::MissingField { field: "audio" }),
            RawProviderResponse::Json(body) => Err(ProviderError::MalformedResponse(format!(
                "expected an audio stream, got JSON: {body}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn image_takes_first_url() {
        let raw = RawProviderResponse::Json(json!({
            "images": [{"url": "https://x/1.png"}, {"url": "https://x/2.png"}]
        }));
        assert_eq!(ImageResult::try_from(raw).unwrap().url, "https://x/1.png");
    }

    #[test]
    fn image_missing_list_fails_fast() {
        let raw = RawProviderResponse::Json(json!({"images": []}));
        assert_matches!(
            ImageResult::try_from(raw),
            Err(ProviderError::MissingField { field: "images[0].url" })
        );
    }

    #[test]
    fn video_reads_top_level_field() {
        let raw = RawProviderResponse::Json(json!({"video_url": "https://x/v.mp4"}));
        assert_eq!(VideoResult::try_from(raw).unwrap().video_url, "https://x/v.mp4");
    }

    #[test]
    fn video_falls_back_to_nested_url() {
        let raw = RawProviderResponse::Json(json!({"video": {"url": "https://x/n.mp4"}}));
        assert_eq!(VideoResult::try_from(raw).unwrap().video_url, "https://x/n.mp4");
    }

    #[test]
    fn video_missing_field_fails_fast() {
        let raw = RawProviderResponse::Json(json!({"status": "completed"}));
        assert_matches!(
            VideoResult::try_from(raw),
            Err(ProviderError::MissingField { field: "video_url" })
        );
    }

    #[test]
    fn speech_requires_audio_bytes() {
        assert!(SpeechResult::try_from(RawProviderResponse::Audio(vec![1, 2, 3])).is_ok());
        assert_matches!(
            SpeechResult::try_from(RawProviderResponse::Audio(Vec::new())),
            Err(ProviderError::MissingField { field: "audio" })
        );
        assert_matches!(
            SpeechResult::try_from(RawProviderResponse::Json(json!({}))),
            Err(ProviderError::MalformedResponse(_))
        );
    }

    #[test]
    fn json_capabilities_reject_audio() {
        assert_matches!(
            ImageResult::try_from(RawProviderResponse::Audio(vec![0])),
            Err(ProviderError::MalformedResponse(_))
        );
    }
}
