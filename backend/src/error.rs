//! Error handling for the AgroGraf dashboard
//!
//! Provides consistent error responses in Portuguese and English

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Invalid telemetry payload: {0}")]
    InvalidTelemetry(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Rendering errors
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_pt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidTelemetry(_) | AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> ErrorDetail {
        match self {
            AppError::InvalidTelemetry(msg) => ErrorDetail {
                code: "INVALID_TELEMETRY".to_string(),
                message_en: msg.clone(),
                message_pt: "Dados inválidos".to_string(),
                field: None,
            },
            AppError::Upload(msg) => ErrorDetail {
                code: "UPLOAD_ERROR".to_string(),
                message_en: format!("Upload error: {}", msg),
                message_pt: format!("Falha no envio da imagem: {}", msg),
                field: Some("imagem".to_string()),
            },
            AppError::NotFound(resource) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message_en: format!("{} not found", resource),
                message_pt: format!("{} não encontrado", resource),
                field: None,
            },
            AppError::Template(_) => ErrorDetail {
                code: "TEMPLATE_ERROR".to_string(),
                message_en: "Failed to render page".to_string(),
                message_pt: "Falha ao renderizar a página".to_string(),
                field: None,
            },
            AppError::Internal(msg) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message_en: msg.clone(),
                message_pt: "Erro interno do servidor".to_string(),
                field: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: self.detail() })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telemetry_errors_are_bad_requests() {
        let err = AppError::InvalidTelemetry("not an object".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail().message_pt, "Dados inválidos");
    }

    #[test]
    fn internal_errors_hide_details_in_portuguese() {
        let err = AppError::Internal("csv writer failed".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = err.detail();
        assert_eq!(detail.code, "INTERNAL_ERROR");
        assert_eq!(detail.message_pt, "Erro interno do servidor");
    }
}
