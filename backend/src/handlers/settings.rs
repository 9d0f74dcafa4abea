//! Settings page handlers

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};
use axum_extra::extract::Form;
use serde::Deserialize;
use shared::{Page, SettingsForm};

use crate::error::AppResult;
use crate::middleware::CurrentSession;
use crate::views::{render, Layout, SettingsPage};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SettingsQuery {
    pub salvo: Option<String>,
}

pub async fn settings_page(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Query(query): Query<SettingsQuery>,
) -> AppResult<Html<String>> {
    let session = state.sessions.load(session_id).await;
    let layout = Layout::new(Page::Settings, &session.settings);
    render(&SettingsPage::new(layout, &session.settings, query.salvo.is_some()))
}

/// Store the submitted preferences in the session
pub async fn save_settings(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Form(form): Form<SettingsForm>,
) -> Redirect {
    state
        .sessions
        .update(session_id, |session| session.save_settings(&form))
        .await;
    tracing::info!(session = %session_id, "Settings saved");

    Redirect::to(&format!("{}?salvo=1", Page::Settings.path()))
}
