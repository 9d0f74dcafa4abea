//! Telemetry ingest handler

use axum::{body::Bytes, Json};
use shared::IngestAck;

use crate::error::AppResult;
use crate::services::TelemetryService;

/// Accept one reading from a field board
///
/// The body is read raw so malformed JSON gets the same error body as a
/// non-object payload.
pub async fn ingest_telemetry(body: Bytes) -> AppResult<Json<IngestAck>> {
    let ack = TelemetryService::new().ingest_bytes(&body)?;
    Ok(Json(ack))
}
