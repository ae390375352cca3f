//! Configuration management for the MCP server.
//!
//! All settings come from the process environment (optionally seeded from a
//! `.env` file) and are read exactly once at startup.

use super::transport::TransportConfig;
use super::webex::{DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Webex API access configuration.
    pub webex: WebexConfig,

    /// Settings from the environment that were ignored or replaced.
    /// Collected before logging exists; the binary logs them at startup.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Display name reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Debug mode, enabled with `DEBUG=true`.
    pub debug: bool,
}

/// Webex API access configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct WebexConfig {
    /// Bearer token for every API call. Required at startup.
    #[serde(skip_serializing)]
    pub access_token: Option<String>,

    /// REST API base URL.
    pub base_url: String,

    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for WebexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebexConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for WebexConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Webex MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                debug: false,
            },
            transport: TransportConfig::default(),
            webex: WebexConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Whether `WEBEX_API_BASE_URL` pointed the client somewhere else.
    pub fn has_base_url_override(&self) -> bool {
        self.webex.base_url != DEFAULT_BASE_URL
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `WEBEX_ACCESS_TOKEN`, `WEBEX_API_BASE_URL`,
    /// `SERVER_NAME`, `DEBUG`, `MCP_LOG_LEVEL`, plus the transport variables
    /// read by [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("SERVER_NAME") {
            config.server.name = name;
        }

        config.logging.debug = std::env::var("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if config.logging.debug {
            config.logging.level = "debug".to_string();
        }
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env(&mut config.warnings);

        config.webex.access_token = std::env::var("WEBEX_ACCESS_TOKEN").ok();
        if let Ok(base_url) = std::env::var("WEBEX_API_BASE_URL") {
            config.webex.base_url = base_url;
        }

        config
    }
}
