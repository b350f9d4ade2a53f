//! Chat orchestration: intent routing + best-effort retrieval + completion.
//!
//! Public API: [`ChatOrchestrator::answer`]. It classifies the message
//! intent (`/search`, `/ask`, or plain), conditionally looks up documents,
//! assembles the prompts, calls the completion service, and shapes the
//! final [`ChatAnswer`].
//!
//! The two upstream calls carry deliberately asymmetric error policies:
//! retrieval is best-effort (failures degrade to an empty context),
//! completion is the primary deliverable (failures propagate).

mod api_types;
mod cfg;
mod error;
mod intent;

pub mod prompt;

pub use api_types::ChatAnswer;
pub use cfg::OrchestratorConfig;
pub use error::ChatError;
pub use intent::Intent;

pub use doc_retrieval::{DocumentShape, RetrievalConfig, RetrievedDocument};
pub use llm_completion::{CompletionConfig, CompletionError, ConfigError};

use std::time::Instant;

use doc_retrieval::RetrievalClient;
use llm_completion::CompletionService;
use tracing::{debug, info, warn};

/// Stateless per-request flow over two pre-built upstream clients.
///
/// Constructed once at startup and shared across requests; every call to
/// [`answer`](Self::answer) is independent.
#[derive(Debug)]
pub struct ChatOrchestrator {
    completion: CompletionService,
    retrieval: Option<RetrievalClient>,
}

impl ChatOrchestrator {
    /// Wires up the upstream clients from the resolved config.
    ///
    /// # Errors
    /// Propagates client construction failures (bad endpoint, empty
    /// credential, HTTP client build). These are startup errors; nothing
    /// here touches the network.
    pub fn new(cfg: OrchestratorConfig) -> Result<Self, ChatError> {
        let completion = CompletionService::new(cfg.completion)?;
        let retrieval = cfg.retrieval.map(RetrievalClient::new).transpose()?;
        Ok(Self {
            completion,
            retrieval,
        })
    }

    /// Answers one chat message.
    ///
    /// The caller guarantees `message` is non-empty after trimming (the
    /// HTTP layer rejects empty input before any classification runs).
    ///
    /// # Errors
    /// Only completion failures surface as [`ChatError`]; a failed or
    /// unconfigured retrieval step degrades to an empty context.
    pub async fn answer(&self, message: &str) -> Result<ChatAnswer, ChatError> {
        let started = Instant::now();
        let (intent, query) = Intent::classify(message);

        let mut consulted = false;
        let docs = match &self.retrieval {
            Some(client) if intent.wants_retrieval() => {
                consulted = true;
                match client.lookup(query).await {
                    Ok(docs) => docs,
                    Err(e) => {
                        // Best-effort step: log and continue without context.
                        warn!(error = %e, "document lookup failed; continuing without context");
                        Vec::new()
                    }
                }
            }
            None if intent.wants_retrieval() => {
                debug!("retrieval not configured; answering without document context");
                Vec::new()
            }
            _ => Vec::new(),
        };

        let context = prompt::join_context(&docs);
        let (system, user) = if context.is_empty() {
            (prompt::DEFAULT_SYSTEM, query.to_string())
        } else {
            (
                prompt::CONTEXT_SYSTEM,
                prompt::build_user_prompt(query, &context),
            )
        };

        let answer = self.completion.generate(system, &user).await?;

        let search_mode = consulted && !docs.is_empty();
        info!(
            intent = ?intent,
            consulted,
            documents = docs.len(),
            search_mode,
            latency_ms = started.elapsed().as_millis(),
            "chat answered"
        );

        Ok(ChatAnswer {
            answer,
            context: docs,
            search_mode,
        })
    }
}
