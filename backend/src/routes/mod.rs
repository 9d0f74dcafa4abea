//! Route definitions for the AgroGraf dashboard

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{error::AppError, handlers, AppState};

/// Server-rendered pages and their form posts
pub fn page_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::dashboard))
        .nest("/simulador", simulator_routes())
        .route(
            "/identificacao",
            get(handlers::identification_page)
                .post(handlers::upload_image)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/alarmes", get(handlers::alarms_page).post(handlers::create_alarm))
        .route("/relatorios", get(handlers::reports_page))
        .route(
            "/configuracoes",
            get(handlers::settings_page).post(handlers::save_settings),
        )
}

/// Simulator page and its form actions
fn simulator_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::simulator_page))
        .route("/simular", post(handlers::run_simulation))
        .route("/nova", post(handlers::reset_simulation))
        .route("/chat", post(handlers::send_chat_message))
}

/// JSON API
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/catalog", get(handlers::get_catalog))
        .route("/simulations", post(handlers::create_simulation))
        .route("/sensors", get(handlers::get_sensor_series))
        .route(
            "/chat",
            get(handlers::get_chat_log).post(handlers::post_chat_message),
        )
        .nest("/reports", report_routes())
        .route("/alarms", get(handlers::list_alarms))
        .route("/telemetry", post(handlers::ingest_telemetry))
        .fallback(api_not_found)
}

/// Report listing and export
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_reports))
        .route("/export.csv", get(handlers::export_reports_csv))
}

async fn api_not_found() -> AppError {
    AppError::NotFound("Endpoint".to_string())
}
