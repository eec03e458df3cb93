//! Job invocation: the error boundary between callers and providers.
//!
//! [`JobInvoker`] runs one generation request against the matching provider
//! adapter under a capability-specific deadline and always hands back a
//! well-formed [`GenerationResult`](reelforge_core::result::GenerationResult).

pub mod invoker;

pub use invoker::{Deadlines, JobInvoker};
