//! HTTP handlers for pages and the JSON API

pub mod alarm;
pub mod chat;
pub mod dashboard;
pub mod health;
pub mod identification;
pub mod reporting;
pub mod settings;
pub mod simulator;
pub mod telemetry;

pub use alarm::*;
pub use chat::*;
pub use dashboard::*;
pub use health::*;
pub use identification::*;
pub use reporting::*;
pub use settings::*;
pub use simulator::*;
pub use telemetry::*;
