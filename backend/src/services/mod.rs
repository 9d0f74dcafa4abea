//! Business logic services for the AgroGraf dashboard

pub mod reporting;
pub mod session;
pub mod telemetry;

pub use reporting::ReportingService;
pub use session::SessionStore;
pub use telemetry::TelemetryService;
