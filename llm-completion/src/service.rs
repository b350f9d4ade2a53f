//! Completion service for chat text generation.
//!
//! Minimal, non-streaming client around an OpenAI-compatible REST API
//! (Fireworks in production). The endpoint is derived from
//! `CompletionConfig::endpoint`:
//! - POST {endpoint}/v1/chat/completions — chat completion (non-streaming)
//!
//! Constructor validation:
//! - `cfg.api_key` must be non-empty
//! - `cfg.endpoint` must start with http:// or https://
//! - `cfg.model` must be non-empty
//!
//! Errors are normalized via unified error types in `error_handler`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::{CompletionConfig, GenerationProfile},
    error_handler::{CompletionError, ConfigError, make_snippet, validate_http_endpoint},
};

/// Thin client for the chat-completion API.
///
/// Constructed from a complete [`CompletionConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (with timeout and default headers) and
/// the fixed [`GenerationProfile`].
#[derive(Debug)]
pub struct CompletionService {
    client: reqwest::Client,
    cfg: CompletionConfig,
    profile: GenerationProfile,
    url_chat: String,
}

impl CompletionService {
    /// Creates a new [`CompletionService`] from the given config.
    ///
    /// Validates the API key, model, and endpoint scheme. Builds an HTTP
    /// client with default headers and a bounded timeout.
    ///
    /// # Errors
    /// - [`CompletionError::Config`] with `MissingVar` if `cfg.api_key` or
    ///   `cfg.model` is empty
    /// - [`CompletionError::Config`] with `InvalidFormat` if `cfg.endpoint`
    ///   has no http(s) scheme
    /// - [`CompletionError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: CompletionConfig) -> Result<Self, CompletionError> {
        if cfg.api_key.trim().is_empty() {
            return Err(ConfigError::MissingVar("FIREWORK_API_KEY").into());
        }
        if cfg.model.trim().is_empty() {
            return Err(ConfigError::MissingVar("FIREWORK_MODEL").into());
        }
        validate_http_endpoint("FIREWORK_API_BASE", &cfg.endpoint)?;

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key)).map_err(|_| {
                ConfigError::InvalidFormat {
                    var: "FIREWORK_API_KEY",
                    reason: "not a valid header value",
                }
            })?,
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
        let url_chat = format!("{}/v1/chat/completions", base);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs.unwrap_or(60),
            "CompletionService initialized"
        );

        Ok(Self {
            client,
            cfg,
            profile: GenerationProfile::default(),
            url_chat,
        })
    }

    /// Performs a **non-streaming** chat completion request.
    ///
    /// The `messages` array is exactly two entries: the system message and
    /// the user message. Sampling parameters come from the fixed
    /// [`GenerationProfile`].
    ///
    /// # Errors
    /// - [`CompletionError::HttpStatus`] for non-2xx responses
    /// - [`CompletionError::HttpTransport`] for client/network failures
    /// - [`CompletionError::InvalidResponseFormat`] if the payload decodes
    ///   but carries no `choices[0].message.content`
    pub async fn generate(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::new(&self.cfg.model, &self.profile, system, user);

        debug!(
            model = %self.cfg.model,
            user_len = user.len(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );

            return Err(CompletionError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: ChatCompletionResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode chat completion response"
                );
                return Err(CompletionError::InvalidResponseFormat(format!(
                    "serde error: {e}; expected `choices[0].message.content`"
                )));
            }
        };

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.and_then(|m| m.content))
            .ok_or_else(|| {
                CompletionError::InvalidResponseFormat(
                    "no `choices[0].message.content` in payload".into(),
                )
            })?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    top_p: f32,
    top_k: u32,
    presence_penalty: f32,
    frequency_penalty: f32,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn new(
        model: &'a str,
        profile: &GenerationProfile,
        system: &'a str,
        user: &'a str,
    ) -> Self {
        Self {
            model,
            max_tokens: profile.max_tokens,
            top_p: profile.top_p,
            top_k: profile.top_k,
            presence_penalty: profile.presence_penalty,
            frequency_penalty: profile.frequency_penalty,
            temperature: profile.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        }
    }
}

/// Chat message for the completion API.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal response for `/v1/chat/completions`.
///
/// All fields are optional on purpose: a 2xx with a hollow body must map
/// to `InvalidResponseFormat`, not a serde error that hides the cause.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatMessageOut>,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    #[serde(default)]
    content: Option<String>,
}
