//! Error types and handling for the MCP server.
//!
//! Startup failures: missing credentials and invalid settings. Tool and API
//! failures have their own types and are reported inside tool results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The Webex access token is missing; the server cannot start.
    #[error("WEBEX_ACCESS_TOKEN environment variable is required")]
    Unconfigured,

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
