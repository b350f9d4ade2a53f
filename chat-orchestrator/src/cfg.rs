//! Runtime configuration loaded from environment variables.
//!
//! Built exactly once at process start and passed into the orchestrator;
//! request handling never reads the environment.

use llm_completion::error_handler::{env_opt_u64, must_env};
use llm_completion::{CompletionConfig, ConfigError};

use doc_retrieval::RetrievalConfig;
use tracing::warn;

/// Config bag for the whole chat flow.
///
/// The completion side is mandatory: without it no answer can ever be
/// produced. The retrieval side is an optional enrichment; when its
/// credentials are absent the backend runs in degraded mode.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub completion: CompletionConfig,
    pub retrieval: Option<RetrievalConfig>,
}

impl OrchestratorConfig {
    /// Build from environment variables.
    ///
    /// # Environment
    /// - `FIREWORK_API_KEY` (required)
    /// - `FIREWORK_API_BASE` (default `https://api.fireworks.ai/inference`)
    /// - `FIREWORK_MODEL` (default `accounts/fireworks/models/deepseek-v3`)
    /// - `COMPLETION_TIMEOUT_SECS` (optional, default 60)
    /// - `ABACUS_DEPLOYMENT_TOKEN` + `ABACUS_DEPLOYMENT_ID` (optional pair)
    /// - `ABACUS_API_BASE` (default `https://api.abacus.ai`)
    /// - `RETRIEVAL_TIMEOUT_SECS` (optional, default 10)
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the completion credential is missing or
    /// a numeric variable fails to parse. Missing retrieval credentials are
    /// not an error: they disable retrieval and log a warning.
    pub fn from_env() -> Result<Self, ConfigError> {
        let completion = CompletionConfig {
            endpoint: env_or("FIREWORK_API_BASE", "https://api.fireworks.ai/inference"),
            api_key: must_env("FIREWORK_API_KEY")?,
            model: env_or("FIREWORK_MODEL", "accounts/fireworks/models/deepseek-v3"),
            timeout_secs: env_opt_u64("COMPLETION_TIMEOUT_SECS")?,
        };

        let token = env_nonempty("ABACUS_DEPLOYMENT_TOKEN");
        let deployment_id = env_nonempty("ABACUS_DEPLOYMENT_ID");
        let retrieval = match (token, deployment_id) {
            (Some(token), Some(deployment_id)) => Some(RetrievalConfig {
                endpoint: env_or("ABACUS_API_BASE", "https://api.abacus.ai"),
                token,
                deployment_id,
                timeout_secs: env_opt_u64("RETRIEVAL_TIMEOUT_SECS")?,
            }),
            (None, None) => {
                warn!("retrieval credentials not set; running without document search");
                None
            }
            _ => {
                warn!(
                    "retrieval credentials incomplete (need both ABACUS_DEPLOYMENT_TOKEN \
                     and ABACUS_DEPLOYMENT_ID); running without document search"
                );
                None
            }
        };

        Ok(Self {
            completion,
            retrieval,
        })
    }
}

fn env_or(k: &str, dflt: &str) -> String {
    std::env::var(k)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| dflt.to_string())
}

fn env_nonempty(k: &str) -> Option<String> {
    std::env::var(k).ok().filter(|v| !v.trim().is_empty())
}
