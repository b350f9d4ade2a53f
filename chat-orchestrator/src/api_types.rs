//! Public types re-used by external crates (e.g., the HTTP API layer).

use doc_retrieval::RetrievedDocument;

/// Final answer together with the exact documents fed to the model.
///
/// `context` is empty when retrieval was skipped, failed, or matched
/// nothing; `search_mode` is true only when retrieval was actually
/// consulted **and** contributed at least one document.
#[derive(Clone, Debug)]
pub struct ChatAnswer {
    pub answer: String,
    pub context: Vec<RetrievedDocument>,
    pub search_mode: bool,
}
