//! Configuration loading and constants.
//!
//! Defines the literal response values served by the API, the defaults for
//! the HTTP listener and logging, and `AppConfig`, which is loaded from an
//! optional TOML file. Every section of the file may be omitted.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Service Identity
// =============================================================================

/// Version reported by the root and info endpoints
pub const SERVICE_VERSION: &str = "1.0.0";

/// Human-readable service title (info endpoint, OpenAPI document)
pub const SERVICE_TITLE: &str = "FastAPI Hello World";

/// Machine-friendly service name reported by the health check
pub const SERVICE_NAME: &str = "fastapi-hello-world";

/// Greeting returned by the root endpoint
pub const ROOT_MESSAGE: &str = "Hello World from FastAPI!";

/// Status reported by the root and health endpoints
pub const STATUS_HEALTHY: &str = "healthy";

// =============================================================================
// Environment
// =============================================================================

/// Environment variable naming the deployment environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Environment reported when `ENVIRONMENT` is unset
pub const DEFAULT_ENVIRONMENT: &str = "development";

// =============================================================================
// HTTP Listener
// =============================================================================

/// Default bind host (all interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default bind address, for help text and logs
pub const DEFAULT_BIND_ADDR: &str = formatcp!("{}:{}", DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT);

/// Seconds to wait for in-flight requests after a shutdown signal
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

// Health probes must always reach the process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Response header carrying the per-request UUID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "hello_world_api=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Accepted values for `logging.format`
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for open connections on SIGTERM/SIGINT
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }

    /// `host:port` string suitable for socket address parsing
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from the given path, or fall back to defaults when none is given.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "http.host must not be empty".to_string(),
            ));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.format must be one of {:?}, got {:?}",
                LOG_FORMATS, self.logging.format
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
