//! Configuration management for the AgroGraf dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRO_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Session cookie configuration
    pub session: SessionConfig,

    /// Logging configuration
    pub log: LogConfig,

    /// Sensor emulator configuration
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    pub cookie_name: String,

    /// Seconds of inactivity after which a session is dropped
    pub idle_timeout_secs: u64,

    /// Seconds between two sweeps for idle sessions
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    /// Ingest endpoint the emulator posts to
    pub ingest_url: String,

    /// Seconds between two readings
    pub interval_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("AGRO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8050)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.max_upload_bytes", 10 * 1024 * 1024)?
            .set_default("session.cookie_name", "agrograf_session")?
            .set_default("session.idle_timeout_secs", 1800)?
            .set_default("session.sweep_interval_secs", 60)?
            .set_default("log.json", false)?
            .set_default("telemetry.ingest_url", "http://127.0.0.1:8050/api/v1/telemetry")?
            .set_default("telemetry.interval_secs", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRO_ prefix)
            .add_source(
                Environment::with_prefix("AGRO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            session: SessionConfig::default(),
            log: LogConfig { json: false },
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8050,
            host: "0.0.0.0".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "agrograf_session".to_string(),
            idle_timeout_secs: 1800,
            sweep_interval_secs: 60,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            ingest_url: "http://127.0.0.1:8050/api/v1/telemetry".to_string(),
            interval_secs: 30,
        }
    }
}
