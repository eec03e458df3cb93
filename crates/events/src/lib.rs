//! Delivery of provider completion callbacks to the downstream application.
//!
//! - [`CallbackRelay`] forwards a [`CallbackEvent`] to the downstream
//!   webhook endpoint and reports a [`RelayOutcome`].
//! - [`RelayPolicy`] controls how many attempts a single relay makes.
//!
//! [`CallbackEvent`]: reelforge_core::callback::CallbackEvent
//! [`RelayOutcome`]: reelforge_core::callback::RelayOutcome

pub mod relay;

pub use relay::{CallbackRelay, RelayError, RelayPolicy};
