//! Typed error for the chat-orchestrator crate.
//!
//! Retrieval failures never appear here: they are swallowed inside the
//! orchestration flow and degrade to an empty context. Only failures of
//! the primary answer path (and startup wiring) surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Completion client failures: HTTP status, transport, invalid payload,
    /// or configuration at construction time.
    #[error(transparent)]
    Completion(#[from] llm_completion::CompletionError),

    /// Retrieval client construction failures (startup only; lookup errors
    /// are handled inside the flow).
    #[error(transparent)]
    Retrieval(#[from] doc_retrieval::RetrievalError),
}
