//! Unified error handling for `llm-completion`.
//!
//! This module exposes the crate's error type [`CompletionError`], the
//! config-time [`ConfigError`], and small helpers for reading environment
//! variables and trimming upstream response bodies for logs.
//!
//! All messages include the suffix `[LLM Completion]` to simplify
//! attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the crate.
pub type Result<T> = std::result::Result<T, CompletionError>;

/// Top-level error for the completion client.
///
/// A structurally invalid success payload is a first-class failure here:
/// the completion answer is the primary deliverable of the whole system,
/// so it must never be silently defaulted.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Configuration/validation errors (startup time).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream returned a non-successful HTTP status.
    #[error("[LLM Completion] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// 2xx response without an extractable `choices[0].message.content`.
    #[error("[LLM Completion] invalid response format: {0}")]
    InvalidResponseFormat(String),

    /// Underlying HTTP transport error (e.g., `reqwest::Error`).
    #[error("[LLM Completion] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[LLM Completion] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (like timeouts or token limits).
    #[error("[LLM Completion] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `COMPLETION_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[LLM Completion] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `FIREWORK_API_BASE`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`ConfigError::MissingVar`] if the variable is absent or empty.
pub fn must_env(name: &'static str) -> std::result::Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not
/// a valid `u64`.
pub fn env_opt_u64(name: &'static str) -> std::result::Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => {
            v.parse::<u64>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidNumber {
                    var: name,
                    reason: "expected u64",
                })
        }
        _ => Ok(None),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start
/// with a valid HTTP scheme.
pub fn validate_http_endpoint(
    var: &'static str,
    value: &str,
) -> std::result::Result<(), ConfigError> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        })
    }
}

/// Trims an upstream body to a short single-line snippet for logs/errors.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 300;
    let compact: String = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.len() <= MAX {
        compact
    } else {
        let mut end = MAX;
        while end > 0 && !compact.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &compact[..end])
    }
}
