//! Normalized document records.
//!
//! The matching service has returned its hits in several shapes over time:
//! bare strings, `{text}` objects, `{content}` objects, and free-form
//! objects. Shape is resolved exactly once at ingestion into a tagged
//! record with a single display text, so downstream code never probes
//! JSON again.

use serde::Serialize;
use serde_json::Value;

/// How the display text of a document was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentShape {
    /// The hit was a bare JSON string.
    RawText,
    /// The hit was an object with a `text` or `content` string field.
    FieldText,
    /// No text-bearing field; the whole object was serialized.
    Opaque,
}

/// A single matched snippet, in relevance order as returned upstream.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievedDocument {
    /// Normalized display text.
    pub text: String,
    /// Provenance of `text`.
    pub shape: DocumentShape,
}

impl RetrievedDocument {
    /// Normalizes one element of the matches list.
    ///
    /// Precedence: bare string → `text` field → `content` field →
    /// compact serialization of the full element.
    pub fn from_value(value: &Value) -> Self {
        if let Value::String(s) = value {
            return Self {
                text: s.clone(),
                shape: DocumentShape::RawText,
            };
        }
        for field in ["text", "content"] {
            if let Some(s) = value.get(field).and_then(Value::as_str) {
                return Self {
                    text: s.to_string(),
                    shape: DocumentShape::FieldText,
                };
            }
        }
        Self {
            text: value.to_string(),
            shape: DocumentShape::Opaque,
        }
    }
}
