//! Telemetry ingest client used by the sensor emulator
//!
//! Posts readings to the dashboard's `/api/v1/telemetry` endpoint the way a
//! field board would.

use std::time::Duration;

use reqwest::Client;
use shared::{IngestAck, TelemetryReading};

use crate::error::{AppError, AppResult};

/// Ingest endpoint client
#[derive(Clone)]
pub struct TelemetryClient {
    client: Client,
    ingest_url: String,
}

impl TelemetryClient {
    pub fn new(ingest_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            ingest_url: ingest_url.into(),
        })
    }

    pub fn ingest_url(&self) -> &str {
        &self.ingest_url
    }

    /// Send one reading and return the server's acknowledgement
    pub async fn send(&self, reading: &TelemetryReading) -> AppResult<IngestAck> {
        let response = self
            .client
            .post(&self.ingest_url)
            .json(reading)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Telemetry request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "Telemetry endpoint returned {}: {}",
                status, body
            )));
        }

        response
            .json::<IngestAck>()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse ingest response: {}", e)))
    }
}
