//! Disaster alarm handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::Form;
use shared::{Alarm, NewAlarmInput, Page, SessionContext};
use validator::{Validate, ValidationErrors};

use crate::error::AppResult;
use crate::middleware::CurrentSession;
use crate::views::{render, AlarmRow, AlarmsPage, Layout};
use crate::AppState;

/// Alarm list with the add form
pub async fn alarms_page(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> AppResult<Response> {
    let session = state.sessions.load(session_id).await;
    Ok(render(&alarms_view(&session, None))?.into_response())
}

/// Add an alarm; an invalid form re-renders the page with the error
pub async fn create_alarm(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Form(input): Form<NewAlarmInput>,
) -> AppResult<Response> {
    if let Err(errors) = input.validate() {
        tracing::warn!(session = %session_id, "Rejected alarm: {}", errors);
        let session = state.sessions.load(session_id).await;
        let page = alarms_view(&session, Some(first_message(&errors)));
        return Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response());
    }

    let alarm = input.into_alarm();
    tracing::info!(session = %session_id, kind = ?alarm.kind, "Alarm added");
    state
        .sessions
        .update(session_id, |session| session.add_alarm(alarm))
        .await;

    Ok(Redirect::to(Page::Alarms.path()).into_response())
}

/// Alarms of the current session
pub async fn list_alarms(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> Json<Vec<Alarm>> {
    Json(state.sessions.load(session_id).await.alarms)
}

fn alarms_view(session: &SessionContext, error: Option<String>) -> AlarmsPage {
    AlarmsPage {
        layout: Layout::new(Page::Alarms, &session.settings),
        kinds: AlarmsPage::kind_choices(),
        alarms: session.alarms.iter().map(AlarmRow::from).collect(),
        error,
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Descrição do alarme inválida".to_string())
}
