//! Prompt builder: system instructions + context-grounded user prompt.

use doc_retrieval::RetrievedDocument;

/// System instructions when retrieved context is injected.
pub const CONTEXT_SYSTEM: &str = "You are a helpful assistant. Use the provided context to answer questions accurately. If the information is not in the context, state that you don't have that information.";

/// System instructions when no context is available.
pub const DEFAULT_SYSTEM: &str = "You are a helpful assistant.";

/// Joins document texts into one context block, blank-line separated,
/// preserving relevance order.
pub fn join_context(docs: &[RetrievedDocument]) -> String {
    docs.iter()
        .map(|d| d.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds the user prompt for a context-grounded question.
pub fn build_user_prompt(query: &str, context: &str) -> String {
    format!("Context:\n{context}\n\nQuestion: {query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_retrieval::{DocumentShape, RetrievedDocument};

    fn doc(text: &str) -> RetrievedDocument {
        RetrievedDocument {
            text: text.into(),
            shape: DocumentShape::FieldText,
        }
    }

    #[test]
    fn context_joins_with_blank_line() {
        let joined = join_context(&[doc("one"), doc("two")]);
        assert_eq!(joined, "one\n\ntwo");
    }

    #[test]
    fn empty_docs_join_to_empty() {
        assert_eq!(join_context(&[]), "");
    }

    #[test]
    fn user_prompt_layout() {
        let p = build_user_prompt("capital of France", "Paris is the capital.");
        assert_eq!(
            p,
            "Context:\nParis is the capital.\n\nQuestion: capital of France"
        );
    }
}
