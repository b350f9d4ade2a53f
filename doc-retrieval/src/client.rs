//! HTTP client for the document-matching service.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    error::RetrievalError,
    record::RetrievedDocument,
};

/// Keys probed, in order, for the matches list in the lookup response.
/// The endpoint has renamed this field across deployments.
const MATCH_LIST_KEYS: [&str; 3] = ["matches", "results", "data"];

/// Connection configuration for the matching service.
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// API base URL (e.g., `https://api.abacus.ai`). The client appends
    /// `/api/v0/lookup_matches`.
    pub endpoint: String,

    /// Bearer token for the deployment.
    pub token: String,

    /// Deployment identifier sent with every lookup.
    pub deployment_id: String,

    /// Optional request timeout (in seconds, default 10).
    pub timeout_secs: Option<u64>,
}

/// Client for `POST /api/v0/lookup_matches`.
///
/// Built once at startup and shared across requests; holds a
/// preconfigured `reqwest::Client` with timeout and default headers.
#[derive(Debug)]
pub struct RetrievalClient {
    client: reqwest::Client,
    deployment_id: String,
    url_lookup: String,
}

#[derive(Serialize)]
struct LookupRequest<'a> {
    deployment_id: &'a str,
    data: &'a str,
}

impl RetrievalClient {
    /// Creates a new [`RetrievalClient`] from the given config.
    ///
    /// # Errors
    /// Returns [`RetrievalError::Decode`] if the token cannot form a valid
    /// header value, or [`RetrievalError::Transport`] if the HTTP client
    /// cannot be built.
    pub fn new(cfg: RetrievalConfig) -> Result<Self, RetrievalError> {
        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(10));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.token))
                .map_err(|e| RetrievalError::Decode(format!("invalid token header: {e}")))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let base = cfg.endpoint.trim().trim_end_matches('/').to_string();
        let url_lookup = format!("{}/api/v0/lookup_matches", base);

        info!(
            endpoint = %cfg.endpoint,
            deployment_id = %cfg.deployment_id,
            timeout_secs = cfg.timeout_secs.unwrap_or(10),
            "RetrievalClient initialized"
        );

        Ok(Self {
            client,
            deployment_id: cfg.deployment_id,
            url_lookup,
        })
    }

    /// Looks up documents matching `query`, in relevance order.
    ///
    /// The matches list is taken from the first present of the
    /// `matches` / `results` / `data` top-level fields; a response with
    /// none of them counts as zero matches. Each element is normalized
    /// once via [`RetrievedDocument::from_value`].
    ///
    /// # Errors
    /// - [`RetrievalError::HttpStatus`] for non-2xx responses
    /// - [`RetrievalError::Transport`] for client/network failures
    /// - [`RetrievalError::Decode`] if the body is not JSON or the
    ///   matches field is not an array
    pub async fn lookup(&self, query: &str) -> Result<Vec<RetrievedDocument>, RetrievalError> {
        let started = Instant::now();
        let body = LookupRequest {
            deployment_id: &self.deployment_id,
            data: query,
        };

        debug!(query_len = query.len(), "POST {}", self.url_lookup);

        let resp = self.client.post(&self.url_lookup).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_lookup.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            warn!(
                %status,
                %url,
                latency_ms = started.elapsed().as_millis(),
                "lookup returned non-success status"
            );

            return Err(RetrievalError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| RetrievalError::Decode(format!("body is not JSON: {e}")))?;

        let docs = extract_matches(&payload)?;

        info!(
            matches = docs.len(),
            latency_ms = started.elapsed().as_millis(),
            "lookup completed"
        );

        Ok(docs)
    }
}

/// Trims an upstream body to a short single-line snippet for logs/errors.
fn make_snippet(body: &str) -> String {
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

/// Pulls the matches list out of a lookup payload and normalizes each hit.
fn extract_matches(payload: &Value) -> Result<Vec<RetrievedDocument>, RetrievalError> {
    let Some(list) = MATCH_LIST_KEYS.iter().find_map(|k| payload.get(*k)) else {
        // Older deployments omit the field entirely when nothing matched.
        return Ok(Vec::new());
    };

    let items = list.as_array().ok_or_else(|| {
        RetrievalError::Decode("matches field is present but not an array".into())
    })?;

    Ok(items.iter().map(RetrievedDocument::from_value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_present_key_wins() {
        let payload = json!({ "results": ["a"], "data": ["b"] });
        let docs = extract_matches(&payload).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].text, "a");
    }

    #[test]
    fn absent_list_means_no_matches() {
        let docs = extract_matches(&json!({ "request_id": "x" })).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn non_array_list_is_a_decode_error() {
        let err = extract_matches(&json!({ "matches": "oops" })).unwrap_err();
        assert!(matches!(err, RetrievalError::Decode(_)));
    }

    #[test]
    fn snippet_collapses_whitespace() {
        assert_eq!(make_snippet("try\n  again\nlater"), "try again later");
    }

    #[test]
    fn snippet_clamps_long_bodies() {
        let s = make_snippet(&"x".repeat(5000));
        assert!(s.len() <= 310);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn order_is_preserved() {
        let payload = json!({ "matches": [{"text": "first"}, {"text": "second"}] });
        let docs = extract_matches(&payload).unwrap();
        assert_eq!(docs[0].text, "first");
        assert_eq!(docs[1].text, "second");
    }
}
