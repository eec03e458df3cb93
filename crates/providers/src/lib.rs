//! Provider adapters for remote generation capabilities.
//!
//! Each adapter wraps one external service behind the [`ProviderAdapter`]
//! trait. Adapters build nothing themselves: callers hand them a
//! [`ProviderCall`] and receive the provider's raw response, which the typed
//! results in [`response`] then validate. No adapter retries.

pub mod adapter;
pub mod arguments;
pub mod elevenlabs;
pub mod error;
pub mod higgsfield;
mod http;
pub mod response;

pub use adapter::{ProviderAdapter, ProviderSet};
pub use arguments::{ProviderArguments, ProviderCall};
pub use error::ProviderError;
pub use response::{ImageResult, RawProviderResponse, SpeechResult, VideoResult};
