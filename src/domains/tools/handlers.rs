//! Tool handler traits and shared result types.
//!
//! Every Webex tool implements [`WebexTool`]: a typed parameter struct, a
//! name/description pair and an async `execute`. [`ToolAdapter`] erases the
//! parameter type so the registry can hold all tools behind
//! `Arc<dyn ToolHandler>` and the router can build one route per tool.
//!
//! Outcomes are split by type:
//! - `Ok(ToolOutput::Rejected(..))` - bad call arguments, reported in-band as
//!   a successful tool call whose text explains the problem.
//! - `Err(ApiError)` - the platform call failed; reported as a failed tool
//!   call (`isError: true`).

use async_trait::async_trait;
use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use thiserror::Error;
use tracing::{info, warn};

use super::error::ToolError;
use crate::core::webex::{ApiResult, WebexClient};

/// Argument problems reported back to the caller as tool output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedArgument {
    #[error("Must specify roomId, toPersonId, or toPersonEmail")]
    MissingDestination,

    #[error("Must specify text, markdown, or html content")]
    MissingContent,

    #[error("Must specify personId or personEmail")]
    MissingPerson,

    /// A JSON-array-encoded argument did not parse.
    #[error("Invalid JSON format for {0}")]
    InvalidJson(&'static str),
}

/// Successful outcome of a tool execution.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// A platform object, rendered as 2-space indented JSON.
    Json(Value),

    /// A fixed human-readable message.
    Text(String),

    /// The call arguments were rejected before any request was made.
    Rejected(MalformedArgument),
}

impl ToolOutput {
    /// Render the payload text returned to the caller.
    pub fn render(&self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text.clone(),
            Self::Rejected(reason) => format!("Error: {}", reason),
        }
    }
}

/// A Webex tool with typed parameters.
#[async_trait]
pub trait WebexTool: Send + Sync + 'static {
    /// Parameter struct; its JSON schema is advertised to clients.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Run the tool against the Webex API.
    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput>;
}

/// Object-safe invocation interface used by the registry and router.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Tool metadata (name, description, input schema).
    fn to_tool(&self) -> Tool;

    /// Deserialize `arguments` and execute the tool.
    async fn call(
        &self,
        client: &WebexClient,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError>;
}

/// Bridges a typed [`WebexTool`] to the object-safe [`ToolHandler`].
pub struct ToolAdapter<T>(PhantomData<fn() -> T>);

impl<T> ToolAdapter<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for ToolAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: WebexTool> ToolHandler for ToolAdapter<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: T::NAME.into(),
            description: Some(T::DESCRIPTION.into()),
            input_schema: schema_for_type::<T::Params>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn call(
        &self,
        client: &WebexClient,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        info!(tool = T::NAME, "Tool called");

        let params: T::Params = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = match T::execute(client, params).await {
            Ok(ToolOutput::Rejected(reason)) => {
                warn!("Rejected arguments for {}: {}", T::NAME, reason);
                success_result(ToolOutput::Rejected(reason).render())
            }
            Ok(output) => success_result(output.render()),
            Err(e) => error_result(&e.to_string()),
        };

        Ok(result)
    }
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a failed tool result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}
