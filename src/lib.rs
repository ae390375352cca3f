//! Webex MCP Server Library
//!
//! Exposes Webex meetings, recordings, participants, spaces and messages to
//! MCP clients as tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the Webex REST client, the MCP
//!   server handler and the stdio / streamable-http transports
//! - **domains::tools**: one tool per Webex operation, registered in a
//!   single catalog shared by both transports
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use webex_mcp_server::core::{Config, McpServer, TransportService, WebexClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let client = Arc::new(WebexClient::from_config(&config.webex)?);
//!     let server = McpServer::new(config.clone(), client);
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, WebexClient};
