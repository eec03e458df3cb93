use std::str::FromStr;

use reelforge_core::error::CoreError;
use reelforge_core::health::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Provider and
/// relay settings live in [`reelforge_core::config::AppConfig`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds. Must exceed the longest generation
    /// deadline so a slow job finishes with a result body instead of a 408.
    pub request_timeout_secs: u64,
    /// Service name reported by `GET /health`.
    pub service_name: String,
    /// Service version reported by `GET /health`.
    pub service_version: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `660`                      |
    /// | `SERVICE_NAME`         | `reelforge`                |
    /// | `SERVICE_VERSION`      | crate version              |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 8000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 660)?;

        let service_name = non_blank(lookup("SERVICE_NAME"))
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.into());
        let service_version = non_blank(lookup("SERVICE_VERSION"))
            .unwrap_or_else(|| DEFAULT_SERVICE_VERSION.into());

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            service_name,
            service_version,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, CoreError>
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
            .map_err(|e| CoreError::Config(format!("{key} must be a valid number ({raw:?}): {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_string()]);
        assert_eq!(config.request_timeout_secs, 660);
        assert_eq!(config.service_name, "reelforge");
        assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn service_identity_comes_from_env() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SERVICE_NAME" => Some("filmflow-ai".into()),
            "SERVICE_VERSION" => Some(" 1.0.0 ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.service_name, "filmflow-ai");
        assert_eq!(config.service_version, "1.0.0");
    }

    #[test]
    fn blank_service_name_falls_back_to_default() {
        let config =
            ServerConfig::from_lookup(|key| (key == "SERVICE_NAME").then(|| "  ".into())).unwrap();
        assert_eq!(config.service_name, "reelforge");
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = ServerConfig::from_lookup(|key| match key {
            "CORS_ORIGINS" => Some("https://a.example.com, https://b.example.com,".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example.com", "https://b.example.com"]
        );
    }

    #[test]
    fn bad_port_is_config_error() {
        let err = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "http".into()))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
