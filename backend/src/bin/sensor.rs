//! Field sensor emulator
//!
//! Posts a fixed reading to the dashboard's telemetry endpoint on a fixed
//! interval, logging every response. Failed posts are logged and retried on
//! the next tick.

use std::time::Duration;

use agrograf_backend::{external::TelemetryClient, Config};
use shared::TelemetryReading;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrograf_sensor=info,agrograf_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = TelemetryClient::new(config.telemetry.ingest_url.clone())?;
    let reading = TelemetryReading::sample();
    let mut ticker = tokio::time::interval(Duration::from_secs(config.telemetry.interval_secs.max(1)));

    tracing::info!(
        url = %client.ingest_url(),
        interval_secs = config.telemetry.interval_secs,
        "Sensor emulator started"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match client.send(&reading).await {
                    Ok(ack) => tracing::info!(status = %ack.status, recebido = %ack.recebido, "Reading delivered"),
                    Err(e) => tracing::error!("Failed to deliver reading: {}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Sensor emulator stopped");
                break;
            }
        }
    }

    Ok(())
}
