//! Transport layer for the MCP server.
//!
//! This module provides two transport implementations:
//! - **Streamable HTTP** (default): MCP sessions over HTTP - feature: `http`
//! - **STDIO**: Standard input/output - feature: `stdio`
//!
//! Both hand the connection to rmcp, which drives the MCP server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
