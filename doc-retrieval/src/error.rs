//! Typed error for the doc-retrieval crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures while talking to the document-matching service.
///
/// The orchestrator treats every variant as non-fatal: a failed lookup
/// degrades to an empty context, it never blocks the answer path.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Upstream returned a non-successful HTTP status.
    #[error("retrieval HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// HTTP/transport errors when calling the service.
    #[error("retrieval transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response payload could not be decoded as expected.
    #[error("retrieval decode error: {0}")]
    Decode(String),
}
