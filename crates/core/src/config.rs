//! Process-wide provider and relay configuration.
//!
//! Read once at startup and shared read-only (behind `Arc`) with every
//! component. Nothing in the workspace reads these variables after
//! [`AppConfig::from_env`] returns.

use std::str::FromStr;
use std::time::Duration;

use crate::error::CoreError;

/// Voice used when a speech request names none.
pub const FALLBACK_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// Upper bound on relay attempts, matching the backoff schedule length + 1.
pub const MAX_RELAY_ATTEMPTS: u32 = 4;

/// Credentials and endpoint for the image/video provider.
#[derive(Debug, Clone)]
pub struct HiggsfieldConfig {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
    /// Delay between job status polls.
    pub poll_interval: Duration,
}

/// Credentials and endpoint for the speech provider.
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_voice_id: String,
}

/// Downstream endpoint that receives relayed callbacks.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub downstream_base_url: String,
    pub webhook_secret: String,
    /// Total delivery attempts per event, in `1..=MAX_RELAY_ATTEMPTS`.
    pub max_attempts: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub higgsfield: HiggsfieldConfig,
    pub elevenlabs: ElevenLabsConfig,
    pub relay: RelayConfig,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                          |
    /// |-------------------------------|----------------------------------|
    /// | `HF_API_KEY`                  | (empty)                          |
    /// | `HF_API_SECRET`               | (empty)                          |
    /// | `HIGGSFIELD_BASE_URL`         | `https://platform.higgsfield.ai` |
    /// | `HIGGSFIELD_POLL_INTERVAL_MS` | `2000`                           |
    /// | `ELEVENLABS_API_KEY`          | (empty)                          |
    /// | `ELEVENLABS_BASE_URL`         | `https://api.elevenlabs.io`      |
    /// | `ELEVENLABS_DEFAULT_VOICE_ID` | `21m00Tcm4TlvDq8ikWAM`           |
    /// | `NEXT_PUBLIC_APP_URL`         | `http://localhost:3000`          |
    /// | `MODAL_WEBHOOK_SECRET`        | (empty)                          |
    /// | `RELAY_MAX_ATTEMPTS`          | `1`                              |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let poll_interval_ms: u64 = parse_var(&lookup, "HIGGSFIELD_POLL_INTERVAL_MS", 2000)?;

        let higgsfield = HiggsfieldConfig {
            api_key: var_or(&lookup, "HF_API_KEY", ""),
            api_secret: var_or(&lookup, "HF_API_SECRET", ""),
            base_url: base_url(&lookup, "HIGGSFIELD_BASE_URL", "https://platform.higgsfield.ai"),
            poll_interval: Duration::from_millis(poll_interval_ms),
        };

        let mut default_voice_id = var_or(&lookup, "ELEVENLABS_DEFAULT_VOICE_ID", FALLBACK_VOICE_ID);
        if default_voice_id.is_empty() {
            default_voice_id = FALLBACK_VOICE_ID.to_string();
        }

        let elevenlabs = ElevenLabsConfig {
            api_key: var_or(&lookup, "ELEVENLABS_API_KEY", ""),
            base_url: base_url(&lookup, "ELEVENLABS_BASE_URL", "https://api.elevenlabs.io"),
            default_voice_id,
        };

        let max_attempts: u32 = parse_var(&lookup, "RELAY_MAX_ATTEMPTS", 1)?;
        if !(1..=MAX_RELAY_ATTEMPTS).contains(&max_attempts) {
            return Err(CoreError::Config(format!(
                "RELAY_MAX_ATTEMPTS must be between 1 and {MAX_RELAY_ATTEMPTS}, got {max_attempts}"
            )));
        }

        let relay = RelayConfig {
            downstream_base_url: base_url(&lookup, "NEXT_PUBLIC_APP_URL", "http://localhost:3000"),
            webhook_secret: var_or(&lookup, "MODAL_WEBHOOK_SECRET", ""),
            max_attempts,
        };

        Ok(Self {
            higgsfield,
            elevenlabs,
            relay,
        })
    }
}

fn var_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Base URLs are stored without a trailing slash so paths can be appended.
fn base_url<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    var_or(lookup, key, default).trim_end_matches('/').to_string()
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, CoreError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| CoreError::Config(format!("{key} is invalid ({raw:?}): {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.elevenlabs.default_voice_id, FALLBACK_VOICE_ID);
        assert_eq!(config.relay.downstream_base_url, "http://localhost:3000");
        assert_eq!(config.relay.webhook_secret, "");
        assert_eq!(config.relay.max_attempts, 1);
        assert_eq!(config.higgsfield.poll_interval, Duration::from_secs(2));
    }

    #[test]
    fn overrides_are_read_and_trailing_slash_trimmed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ELEVENLABS_DEFAULT_VOICE_ID", "voice-7"),
            ("NEXT_PUBLIC_APP_URL", "https://app.example.com/"),
            ("MODAL_WEBHOOK_SECRET", "s3cret"),
            ("RELAY_MAX_ATTEMPTS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.elevenlabs.default_voice_id, "voice-7");
        assert_eq!(config.relay.downstream_base_url, "https://app.example.com");
        assert_eq!(config.relay.webhook_secret, "s3cret");
        assert_eq!(config.relay.max_attempts, 3);
    }

    #[test]
    fn blank_default_voice_falls_back() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("ELEVENLABS_DEFAULT_VOICE_ID", "")])).unwrap();
        assert_eq!(config.elevenlabs.default_voice_id, FALLBACK_VOICE_ID);
    }

    #[test]
    fn malformed_number_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("HIGGSFIELD_POLL_INTERVAL_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(err.to_string().contains("HIGGSFIELD_POLL_INTERVAL_MS"));
    }

    #[test]
    fn relay_attempts_out_of_range_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[("RELAY_MAX_ATTEMPTS", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("RELAY_MAX_ATTEMPTS", "9")])).is_err());
    }
}
