use chat_orchestrator::{ChatAnswer, RetrievedDocument};
use serde::{Deserialize, Serialize};

/// Request payload for /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Raw user message; an optional `/search` or `/ask` prefix selects
    /// the retrieval mode. A missing field is treated like an empty one.
    #[serde(default)]
    pub message: String,
}

/// Response payload for /api/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Final model answer (plain text).
    pub response: String,
    /// Documents that were fed to the model, in relevance order;
    /// `null` when no documents were used.
    pub context: Option<Vec<RetrievedDocument>>,
    /// True iff retrieval was consulted and contributed documents.
    #[serde(rename = "searchMode")]
    pub search_mode: bool,
}

impl From<ChatAnswer> for ChatResponse {
    fn from(answer: ChatAnswer) -> Self {
        let context = if answer.context.is_empty() {
            None
        } else {
            Some(answer.context)
        };
        Self {
            response: answer.answer,
            context,
            search_mode: answer.search_mode,
        }
    }
}
