//! External HTTP integrations

pub mod telemetry;

pub use telemetry::TelemetryClient;
