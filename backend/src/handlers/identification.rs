//! Pest identification handlers

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use shared::{
    diagnosis_history, suggested_actions, validate_image_content_type, Page, Settings,
    UploadedImage, IDENTIFICATION_CONFIDENCE,
};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentSession;
use crate::views::{render, DiagnosisRow, IdentificationPage, Layout};
use crate::AppState;

/// Multipart field carrying the image
const IMAGE_FIELD: &str = "imagem";

pub async fn identification_page(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> AppResult<Html<String>> {
    let session = state.sessions.load(session_id).await;
    render(&identification_view(&session.settings, None))
}

/// Echo the uploaded image back; nothing is analysed or stored
pub async fn upload_image(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    mut multipart: Multipart,
) -> AppResult<Html<String>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        // Submitting without choosing a file sends an empty part
        if filename.is_empty() && bytes.is_empty() {
            continue;
        }

        validate_image_content_type(&content_type)
            .map_err(|msg| AppError::Upload(msg.to_string()))?;

        tracing::info!(
            session = %session_id,
            filename = %filename,
            size = bytes.len(),
            "Image uploaded for identification"
        );
        upload = Some(UploadedImage::new(filename, content_type, &STANDARD.encode(&bytes)));
    }

    let session = state.sessions.load(session_id).await;
    render(&identification_view(&session.settings, upload))
}

fn identification_view(settings: &Settings, upload: Option<UploadedImage>) -> IdentificationPage {
    IdentificationPage {
        layout: Layout::new(Page::PestIdentification, settings),
        upload,
        confidence: IDENTIFICATION_CONFIDENCE,
        actions: suggested_actions(),
        history: diagnosis_history().iter().map(DiagnosisRow::from).collect(),
    }
}
