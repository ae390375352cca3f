//! Webex MCP Server Entry Point
//!
//! Loads configuration, initializes logging, builds the Webex client and
//! starts the server on the configured transport.

use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[cfg(feature = "http")]
use webex_mcp_server::core::TransportConfig;
use webex_mcp_server::core::{Config, McpServer, TransportService, WebexClient};
use webex_mcp_server::domains::tools::ToolGroup;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}...", config.server.name, config.server.version);

    for warning in &config.warnings {
        warn!("{}", warning);
    }
    if config.has_base_url_override() {
        info!("Using Webex API base URL override: {}", config.webex.base_url);
    }

    let client = match WebexClient::from_config(&config.webex) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    #[cfg(feature = "http")]
    {
        if let TransportConfig::Http(http) = &config.transport {
            info!("Server will be available at: {}", http.endpoint_url());
        }
    }

    if config.logging.debug {
        info!("Debug mode: ON");
    }

    let server = McpServer::new(config.clone(), client);

    info!("Available tools:");
    for group in ToolGroup::ALL {
        info!("  {}: {}", group, server.registry().names_in(group).join(", "));
    }
    info!("Server initialized with {} tools", server.registry().tool_names().len());

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so the STDIO transport keeps stdout for protocol frames.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
