//! Chat-completion client with a fixed generation profile.
//!
//! Public surface:
//! - [`CompletionService`] — non-streaming `/v1/chat/completions` client
//! - [`CompletionConfig`] / [`GenerationProfile`] — connection + sampling
//! - [`CompletionError`] / [`ConfigError`] — unified error types

mod config;
mod service;

pub mod error_handler;

pub use config::{CompletionConfig, GenerationProfile};
pub use error_handler::{CompletionError, ConfigError};
pub use service::CompletionService;
