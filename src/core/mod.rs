//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the Webex API client, the MCP server
//! handler and the transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;
pub mod webex;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
pub use webex::WebexClient;
