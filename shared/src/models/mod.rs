//! Domain models for the AgroGraf dashboard

mod alarm;
mod catalog;
mod chat;
mod notification;
mod page;
mod pest;
mod presentation;
mod report;
mod sensor;
mod session;
mod settings;
mod simulation;
pub mod sustainability;
mod telemetry;

pub use alarm::*;
pub use catalog::*;
pub use chat::*;
pub use notification::*;
pub use page::*;
pub use pest::*;
pub use presentation::*;
pub use report::*;
pub use sensor::*;
pub use session::*;
pub use settings::*;
pub use simulation::*;
pub use telemetry::*;
