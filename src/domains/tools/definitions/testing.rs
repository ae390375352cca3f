//! Test helpers for exercising tools against a mock Webex API.

use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;
use std::time::Duration;
use wiremock::MockServer;

use crate::core::webex::WebexClient;
use crate::domains::tools::handlers::{ToolAdapter, ToolHandler, WebexTool};

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> WebexClient {
    WebexClient::new("test-token", server.uri(), Duration::from_secs(5)).unwrap()
}

/// Invoke a tool through the same adapter the registry uses.
pub async fn call<T: WebexTool>(client: &WebexClient, arguments: Value) -> CallToolResult {
    let Value::Object(arguments) = arguments else {
        panic!("tool arguments must be a JSON object");
    };
    ToolAdapter::<T>::new().call(client, arguments).await.unwrap()
}

/// Text payload of a tool result.
pub fn text(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}

/// Whether the result is flagged as a failed tool call.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
