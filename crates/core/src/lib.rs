//! Reelforge core domain types.
//!
//! Shared by every other workspace crate: the generation request/result
//! contract, capability policy constants, the callback-relay envelope,
//! process-wide configuration, the health probe, and static catalogs.

pub mod callback;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generation;
pub mod health;
pub mod prompt;
pub mod result;
pub mod types;
