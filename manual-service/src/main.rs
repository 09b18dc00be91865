use manual_service::config::ManualConfig;
use manual_service::startup::Application;
use service_core::observability::init_tracing;
use tracing::Instrument;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ManualConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing("manual-service", &config.common.log_level);

    let service_span = tracing::info_span!(
        "service",
        service = "manual-service",
        version = env!("CARGO_PKG_VERSION"),
    );

    async move {
        let app = Application::build(config).await.map_err(|e| {
            tracing::error!("Failed to build application: {}", e);
            std::io::Error::other(format!("Startup error: {}", e))
        })?;

        app.run_until_stopped().await?;

        tracing::info!("Service shutdown complete");
        Ok::<(), std::io::Error>(())
    }
    .instrument(service_span)
    .await
}
