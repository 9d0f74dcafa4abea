//! Telemetry ingest
//!
//! Field boards post arbitrary JSON readings. Any non-empty JSON value is
//! accepted; nothing is stored, the payload is logged and echoed back.

use chrono::Utc;
use serde_json::Value;
use shared::{validate_telemetry_payload, IngestAck};

use crate::error::{AppError, AppResult};

#[derive(Clone, Default)]
pub struct TelemetryService;

impl TelemetryService {
    pub fn new() -> Self {
        Self
    }

    /// Accept a raw request body
    pub fn ingest_bytes(&self, body: &[u8]) -> AppResult<IngestAck> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::InvalidTelemetry(format!("Body is not valid JSON: {}", e)))?;
        self.ingest(payload)
    }

    pub fn ingest(&self, payload: Value) -> AppResult<IngestAck> {
        validate_telemetry_payload(&payload)
            .map_err(|msg| AppError::InvalidTelemetry(msg.to_string()))?;

        tracing::info!(received_at = %Utc::now(), payload = %payload, "Telemetry received");

        Ok(IngestAck::ok(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn echoes_objects() {
        let ack = TelemetryService::new()
            .ingest(json!({ "agua": 500, "pragas": 1 }))
            .unwrap();
        assert_eq!(ack.status, "ok");
        assert_eq!(ack.recebido["agua"], 500);
    }

    #[test]
    fn rejects_garbage_and_empty_values() {
        let service = TelemetryService::new();
        assert!(matches!(
            service.ingest_bytes(b"not json"),
            Err(AppError::InvalidTelemetry(_))
        ));
        for body in ["{}", "[]", "null", "0", "\"\"", "false"] {
            assert!(service.ingest_bytes(body.as_bytes()).is_err(), "{} accepted", body);
        }
    }

    #[test]
    fn echoes_non_object_values() {
        let service = TelemetryService::new();
        assert_eq!(service.ingest_bytes(b"[1,2,3]").unwrap().recebido, json!([1, 2, 3]));
        assert_eq!(service.ingest_bytes(b"42").unwrap().recebido, json!(42));
        assert_eq!(service.ingest_bytes(b"\"agua\"").unwrap().recebido, json!("agua"));
    }
}
