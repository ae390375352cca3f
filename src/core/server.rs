//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` owns the tool registry and the rmcp router built from it.
//! Both transports drive it through rmcp's `ServerHandler`: STDIO with one
//! long-lived service, streamable HTTP with one clone per session.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::webex::WebexClient;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry shared by both transports.
    registry: Arc<ToolRegistry>,

    /// Tool router for rmcp-driven transports.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server around an authenticated Webex client.
    pub fn new(config: Config, client: Arc<WebexClient>) -> Self {
        let registry = Arc::new(ToolRegistry::new(client));

        Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Webex meetings and messaging tools: schedule and manage meetings, \
                 recordings and participants, and work with spaces and messages."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
