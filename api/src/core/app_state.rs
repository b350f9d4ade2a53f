use chat_orchestrator::{ChatOrchestrator, OrchestratorConfig};

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
///
/// Holds the pre-built orchestrator (and through it both upstream
/// clients); handlers never construct clients or read the environment.
pub struct AppState {
    pub orchestrator: ChatOrchestrator,
}

impl AppState {
    /// Wire the orchestrator from the resolved config.
    pub fn new(config: OrchestratorConfig) -> Result<Self, AppError> {
        let orchestrator = ChatOrchestrator::new(config).map_err(AppError::Startup)?;
        Ok(Self { orchestrator })
    }
}
