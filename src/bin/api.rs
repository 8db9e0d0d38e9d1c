use chrono::Duration;
use finsavvy_advisor::{
    agent::Advisor, api::start_server, config::AdvisorConfig, market::build_market_source,
    state::build_store,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    let config = AdvisorConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    info!("🚀 FinSavvy Advisor - API Server");
    info!("📍 Port: {}", config.port);

    let store = build_store(&config);
    let market = build_market_source(&config)?;
    let advisor = Advisor::new(store, market)
        .with_session_ttl(Duration::minutes(config.session_ttl_minutes.into()));
    let advisor = Arc::new(advisor);

    info!("✅ Advisor initialized");
    info!("📡 Starting API server...");

    start_server(advisor, config.port).await?;

    Ok(())
}
