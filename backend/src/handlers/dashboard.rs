//! Dashboard page and unknown-path fallback

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use shared::{Page, Route, SensorSeries};

use crate::error::AppResult;
use crate::middleware::CurrentSession;
use crate::views::{render, DashboardPage, Layout};
use crate::AppState;

/// Render the monitoring dashboard with freshly generated readings
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> AppResult<Response> {
    let session = state.sessions.load(session_id).await;
    let page = DashboardPage {
        layout: Layout::new(Page::Dashboard, &session.settings),
        charts: SensorSeries::generate().charts(),
    };
    Ok(render(&page)?.into_response())
}

/// Any path no page claims
///
/// Paths that only differ from a page by a trailing slash are redirected
/// there; everything else gets the dashboard.
pub async fn fallback(
    state: State<AppState>,
    session: CurrentSession,
    uri: Uri,
) -> AppResult<Response> {
    let route = Route::resolve(uri.path());
    if route.is_fallback() {
        tracing::warn!(path = %uri.path(), "Unknown path, rendering dashboard");
        return dashboard(state, session).await;
    }

    match route.page() {
        Page::Dashboard => dashboard(state, session).await,
        page => Ok(Redirect::to(page.path()).into_response()),
    }
}

/// Ten fresh readings per series
pub async fn get_sensor_series() -> Json<SensorSeries> {
    Json(SensorSeries::generate())
}
