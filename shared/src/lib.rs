//! Shared types and models for the AgroGraf dashboard
//!
//! This crate contains the domain logic shared between the backend server,
//! the browser (via WASM) and the sensor emulator.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
