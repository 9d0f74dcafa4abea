//! Field sensor telemetry

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One reading posted by a field board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelemetryReading {
    /// Water consumption, litres
    pub agua: u32,
    /// Soil moisture, percent
    pub umidade: u32,
    /// Energy consumption, kWh
    #[serde(with = "rust_decimal::serde::float")]
    pub energia: Decimal,
    /// Temperature, °C
    pub temperatura: i32,
    /// Pest detection events
    pub pragas: u32,
}

impl TelemetryReading {
    /// Fixed payload sent by the board emulator
    pub fn sample() -> Self {
        Self {
            agua: 500,
            umidade: 35,
            energia: Decimal::new(23, 1),
            temperatura: 28,
            pragas: 1,
        }
    }
}

/// Reply of the ingest endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestAck {
    pub status: String,
    pub recebido: serde_json::Value,
}

impl IngestAck {
    pub fn ok(received: serde_json::Value) -> Self {
        Self {
            status: "ok".to_string(),
            recebido: received,
        }
    }
}
