//! AgroGraf - demo agricultural monitoring dashboard
//!
//! Server-rendered pages for monitoring, sustainability simulation, pest
//! identification, alarms, reports and settings, plus a small JSON API and
//! a telemetry ingest endpoint for field sensors.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware::from_fn_with_state, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod views;

pub use config::Config;
use services::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let idle_timeout = Duration::from_secs(config.session.idle_timeout_secs);
        Self {
            config: Arc::new(config),
            sessions: SessionStore::with_idle_timeout(idle_timeout),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::page_routes(state.config.server.max_upload_bytes))
        .nest("/api/v1", routes::api_routes())
        .fallback(handlers::fallback)
        .layer(from_fn_with_state(state.clone(), middleware::session_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
