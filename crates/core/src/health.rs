use serde::Serialize;

/// Service name reported when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "reelforge";
/// Version reported when none is configured.
pub const DEFAULT_SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Liveness payload. Building one has no side effects and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
    pub version: String,
}

impl HealthStatus {
    /// Health payload carrying the built-in service identity.
    pub fn current() -> Self {
        Self::for_service(DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION)
    }

    /// Health payload for a deployment that reports its own name and version.
    pub fn for_service(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: "healthy",
            service: service.into(),
            version: version.into(),
        }
    }
}
