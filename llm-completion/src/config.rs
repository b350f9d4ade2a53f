//! Configuration for the completion client.
//!
//! [`CompletionConfig`] carries the connection parameters (endpoint, key,
//! timeout); the generation profile itself is fixed by design and lives in
//! [`GenerationProfile`]. Sampling knobs are deliberately not
//! user-configurable: the whole backend runs one tuned profile.

/// Connection configuration for an OpenAI-compatible completion endpoint.
///
/// # Fields
///
/// - `endpoint`: API base URL (e.g., `https://api.fireworks.ai/inference`).
///   The client appends `/v1/chat/completions`.
/// - `api_key`: Bearer token. Required; validated at client construction.
/// - `model`: Model identifier sent with every request.
/// - `timeout_secs`: Optional request timeout in seconds (default 60).
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// API base URL (scheme validated at construction).
    pub endpoint: String,

    /// Bearer token for the completion service.
    pub api_key: String,

    /// Model identifier (e.g., `accounts/fireworks/models/deepseek-v3`).
    pub model: String,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

/// Fixed sampling parameters sent on every chat-completion request.
///
/// These mirror the tuned values the service was deployed with and are not
/// exposed through any configuration surface.
#[derive(Debug, Clone, Copy)]
pub struct GenerationProfile {
    pub max_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub temperature: f32,
}

impl Default for GenerationProfile {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            top_p: 1.0,
            top_k: 40,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            temperature: 0.7,
        }
    }
}
