//! Wiring & DI. Entry point: bootstrap adapters, inject into the service, drive stdin.
//! No business logic here; validation and enrichment live in SignalService.

use ml_signal::adapters::io::JsonLinesDriver;
use ml_signal::adapters::logging::TracingSink;
use ml_signal::adapters::model::PlaceholderModel;
use ml_signal::adapters::schema::FieldSchema;
use ml_signal::ports::{LogPort, MessagePort, SchemaPort, SignalModelPort};
use ml_signal::shared::config::AppConfig;
use ml_signal::usecases::SignalService;
use std::sync::Arc;
use tokio::io::{BufReader, stdin, stdout};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv::dotenv();
    let cfg = AppConfig::load();

    let filter = cfg
        .as_ref()
        .map(AppConfig::log_filter_or_default)
        .unwrap_or_else(|_| ml_signal::shared::config::DEFAULT_LOG_FILTER.to_string());
    // Logs go to stderr; stdout carries the enriched JSON lines.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }
    let cfg = cfg.unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });

    // --- Ports ---
    let schema: Arc<dyn SchemaPort> = Arc::new(
        FieldSchema::from_config(&cfg).map_err(|e| anyhow::anyhow!("{}", e))?,
    );
    let model: Arc<dyn SignalModelPort> = Arc::new(PlaceholderModel::new());
    let log: Arc<dyn LogPort> = Arc::new(TracingSink::new());

    // --- Service + driver ---
    let service: Arc<dyn MessagePort> = Arc::new(SignalService::new(schema, model, log));
    let driver = JsonLinesDriver::new(service);

    let summary = driver
        .run(BufReader::new(stdin()), stdout())
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!(
        processed = summary.processed,
        rejected = summary.rejected,
        "done"
    );
    Ok(())
}
