use homework_notifier::bootstrap;
use homework_notifier::config::{Config, TelemetryConfig};
use homework_notifier::infrastructure::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing and metrics
    let _guard = observability::init(&TelemetryConfig::from_env())?;

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("CRITICAL: {}; refusing to start the poll loop", e);
            return Err(e.into());
        }
    };
    tracing::info!("Configuration loaded");

    let (poller, state) = bootstrap::build_poller(&config)?;

    tokio::select! {
        _ = poller.run(state) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received interrupt, shutting down");
        }
    }

    Ok(())
}
