//! AgroGraf dashboard server

use std::time::Duration;

use agrograf_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "agrograf_backend=debug,agrograf_server=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.log.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting AgroGraf dashboard");
    tracing::info!("Environment: {}", config.environment);

    let addr = config.bind_address();
    let sweep_every = Duration::from_secs(config.session.sweep_interval_secs.max(1));
    let state = AppState::new(config);
    let _sweeper = state.sessions.spawn_eviction(sweep_every);
    let app = create_app(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
