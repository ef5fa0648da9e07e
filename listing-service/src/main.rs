use listing_service::config::ListingConfig;
use listing_service::services::init_metrics;
use listing_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before any metric is recorded
    init_metrics()?;

    let config = ListingConfig::load()?;
    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    tracing::info!("Server stopped");
    Ok(())
}
