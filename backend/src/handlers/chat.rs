//! Assistant chat handlers

use axum::{extract::State, response::Redirect, Json};
use axum_extra::extract::Form;
use serde::Deserialize;
use shared::{ChatMessage, SimulatorTab};

use crate::handlers::simulator::tab_path;
use crate::middleware::CurrentSession;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub mensagem: String,
}

/// Page form post; blank messages are ignored
pub async fn send_chat_message(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Form(form): Form<ChatForm>,
) -> Redirect {
    submit(&state, session_id, &form.mensagem).await;
    Redirect::to(&tab_path(SimulatorTab::Assistant))
}

/// Conversation of the current session
pub async fn get_chat_log(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> Json<Vec<ChatMessage>> {
    let session = state.sessions.load(session_id).await;
    Json(session.chat.messages().to_vec())
}

/// Submit a message and return the updated conversation
pub async fn post_chat_message(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Json(form): Json<ChatForm>,
) -> Json<Vec<ChatMessage>> {
    Json(submit(&state, session_id, &form.mensagem).await)
}

async fn submit(state: &AppState, session_id: uuid::Uuid, message: &str) -> Vec<ChatMessage> {
    state
        .sessions
        .update(session_id, |session| {
            let appended = session.send_chat(message);
            if appended == 0 {
                tracing::debug!(session = %session_id, "Ignoring blank chat message");
            }
            session.chat.messages().to_vec()
        })
        .await
}
