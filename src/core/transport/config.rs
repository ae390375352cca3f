//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport.
    #[cfg(feature = "stdio")]
    Stdio,

    /// MCP streamable HTTP transport (default).
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path of the MCP endpoint. Always starts with `/`.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
const DEFAULT_PORT: u16 = 8080;

#[cfg(feature = "http")]
fn default_host() -> String {
    "0.0.0.0".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            Self::Stdio
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    ///
    /// `TRANSPORT` selects the mode (`streamable-http`, `http` or `stdio`);
    /// the HTTP listener reads `MCP_HOST`, `MCP_PORT`, `MCP_HTTP_PATH` and
    /// `MCP_HTTP_CORS`. Settings that had to be replaced are described in
    /// `warnings` so they can be logged once logging is up.
    pub(crate) fn from_env(warnings: &mut Vec<String>) -> Self {
        let transport = std::env::var("TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            "streamable-http" | "http" => Self::Http(HttpConfig::from_env(warnings)),
            "" => Self::default_from_env(warnings),
            other => {
                warnings.push(format!(
                    "Unsupported transport '{}', falling back to {}",
                    other,
                    Self::default().description()
                ));
                Self::default_from_env(warnings)
            }
        }
    }

    #[cfg_attr(not(feature = "http"), allow(unused_variables))]
    fn default_from_env(warnings: &mut Vec<String>) -> Self {
        #[cfg(feature = "http")]
        {
            Self::Http(HttpConfig::from_env(warnings))
        }

        #[cfg(not(feature = "http"))]
        {
            Self::default()
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("streamable-http on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn from_env(warnings: &mut Vec<String>) -> Self {
        let port = std::env::var("MCP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let host = std::env::var("MCP_HOST").unwrap_or_else(|_| default_host());
        let rpc_path = match std::env::var("MCP_HTTP_PATH") {
            Ok(raw) => normalize_rpc_path(&raw).unwrap_or_else(|reason| {
                warnings.push(format!(
                    "Ignoring MCP_HTTP_PATH {:?} ({}), using {}",
                    raw,
                    reason,
                    default_rpc_path()
                ));
                default_rpc_path()
            }),
            Err(_) => default_rpc_path(),
        };
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self {
            port,
            host,
            rpc_path,
            enable_cors,
        }
    }

    /// Public URL clients should use to reach the MCP endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.rpc_path)
    }
}

/// Turn `MCP_HTTP_PATH` into a route the HTTP router can mount.
///
/// A missing leading `/` is added. Paths that collide with the fixed routes
/// or contain route syntax are refused.
#[cfg(feature = "http")]
fn normalize_rpc_path(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty path");
    }

    let path = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };

    if path.trim_end_matches('/').is_empty() || path.trim_end_matches('/') == "/health" {
        return Err("reserved path");
    }
    if path.contains(['{', '}', '*']) || path.split('/').any(|s| s.starts_with(':')) {
        return Err("route syntax is not allowed");
    }

    Ok(path)
}
