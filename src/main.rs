use std::error::Error;

use chat_orchestrator::OrchestratorConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file if present.
    // Deployed instances configure through the process environment instead.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,chat_orchestrator=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Credentials and endpoints are resolved once here; request handlers
    // never touch the process environment.
    let config = OrchestratorConfig::from_env()?;

    api::start(config).await?;

    Ok(())
}
