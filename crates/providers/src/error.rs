use reelforge_core::generation::Capability;

/// Errors from a provider invocation.
///
/// The display text is what ends up in a failed generation result, so each
/// variant carries the provider's raw message where one exists.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider accepted the job but reported a terminal failure.
    #[error("Provider job {request_id} ended with status '{status}'")]
    JobFailed { request_id: String, status: String },

    /// A successful response lacked the field this capability needs.
    #[error("Provider response is missing expected field '{field}'")]
    MissingField { field: &'static str },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// A call argument the adapter relies on was not supplied.
    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),

    /// A call argument cannot be used as a URL path segment.
    #[error("Invalid {argument} '{value}': not a usable path segment")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },

    /// The configured base URL cannot have paths appended to it.
    #[error("Invalid provider base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("Provider '{provider}' does not support {capability}")]
    Unsupported {
        provider: &'static str,
        capability: Capability,
    },
}
