//! HTTP transport implementation.
//!
//! MCP streamable HTTP served by rmcp on the configured endpoint, with
//! sessions tracked by `Mcp-Session-Id`. Two plain JSON routes sit next to
//! it: `/` describes the server and `/health` answers liveness checks.

use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across the informational handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    rpc_path: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum application for `server`.
    ///
    /// Every MCP session gets its own clone of `server`; clones share the
    /// registry and the API client.
    pub fn router(&self, server: McpServer) -> Router {
        let session_server = server.clone();
        let mcp_service = StreamableHttpService::new(
            move || Ok(session_server.clone()),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig::default(),
        );

        let state = AppState {
            server,
            rpc_path: self.config.rpc_path.clone(),
        };

        let mut app = Router::new()
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .route_service(&self.config.rpc_path, mcp_service)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (MCP streamable HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → MCP:    POST/GET/DELETE {}", self.config.rpc_path);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "streamable-http",
        "endpoints": {
            "mcp": state.rpc_path,
            "health": "/health"
        },
        "tools": state.server.registry().tool_names(),
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::webex::WebexClient;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SESSION_HEADER: &str = "mcp-session-id";

    fn server_with_base(base_url: &str) -> McpServer {
        let client = WebexClient::new("test-token", base_url, Duration::from_secs(5)).unwrap();
        McpServer::new(Config::default(), Arc::new(client))
    }

    /// Serve the router on an ephemeral port and return its base URL.
    async fn spawn_app(server: McpServer, rpc_path: &str) -> String {
        let transport = HttpTransport::new(HttpConfig {
            host: "127.0.0.1".to_string(),
            rpc_path: rpc_path.to_string(),
            ..HttpConfig::default()
        });
        let app = transport.router(server);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn post(
        http: &reqwest::Client,
        url: &str,
        session: Option<&str>,
        body: Value,
    ) -> reqwest::RequestBuilder {
        let request = http
            .post(url)
            .header("Accept", "application/json, text/event-stream")
            .json(&body);
        match session {
            Some(id) => request.header(SESSION_HEADER, id),
            None => request,
        }
    }

    /// Read the JSON-RPC message answering request `id`, from either an SSE
    /// stream or a plain JSON body.
    async fn read_reply(mut response: reqwest::Response, id: i64) -> Value {
        let is_json = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));
        if is_json {
            return response.json().await.unwrap();
        }

        let read = async {
            let mut buffer = String::new();
            loop {
                let chunk = response
                    .chunk()
                    .await
                    .unwrap()
                    .expect("stream ended before the reply arrived");
                buffer.push_str(&String::from_utf8_lossy(&chunk));

                let reply = buffer
                    .lines()
                    .filter_map(|line| line.strip_prefix("data:"))
                    .filter_map(|data| serde_json::from_str::<Value>(data.trim()).ok())
                    .find(|message| message["id"] == json!(id));
                if let Some(reply) = reply {
                    return reply;
                }
            }
        };
        tokio::time::timeout(Duration::from_secs(10), read)
            .await
            .expect("no reply within 10s")
    }

    /// Run the initialize handshake and return the session id.
    async fn open_session(http: &reqwest::Client, url: &str) -> String {
        let response = post(
            http,
            url,
            None,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2025-03-26",
                    "capabilities": {},
                    "clientInfo": {"name": "integration-test", "version": "0.0.0"}
                }
            }),
        )
        .send()
        .await
        .unwrap();
        assert!(response.status().is_success());

        let session = response
            .headers()
            .get(SESSION_HEADER)
            .expect("initialize must assign a session")
            .to_str()
            .unwrap()
            .to_string();

        let reply = read_reply(response, 1).await;
        assert_eq!(reply["result"]["serverInfo"]["name"], "Webex MCP Server");
        assert!(reply["result"]["capabilities"]["tools"].is_object());
        assert!(reply["result"]["protocolVersion"].is_string());

        let response = post(
            http,
            url,
            Some(&session),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        )
        .send()
        .await
        .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::ACCEPTED);

        session
    }

    async fn call(http: &reqwest::Client, url: &str, session: &str, id: i64, body: Value) -> Value {
        let mut body = body;
        body["jsonrpc"] = json!("2.0");
        body["id"] = json!(id);
        let response = post(http, url, Some(session), body).send().await.unwrap();
        assert!(response.status().is_success());
        read_reply(response, id).await
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let base = spawn_app(server_with_base("http://127.0.0.1:1"), "/mcp").await;
        let http = reqwest::Client::new();

        let health: Value = http
            .get(format!("{}/health", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["status"], "healthy");
        assert!(health["timestamp"].is_string());

        let root: Value = http.get(&base).send().await.unwrap().json().await.unwrap();
        assert_eq!(root["name"], "Webex MCP Server");
        assert_eq!(root["transport"], "streamable-http");
        assert_eq!(root["endpoints"]["mcp"], "/mcp");
        assert_eq!(root["tools"].as_array().unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_session_lists_tools() {
        let base = spawn_app(server_with_base("http://127.0.0.1:1"), "/mcp").await;
        let url = format!("{}/mcp", base);
        let http = reqwest::Client::new();

        let session = open_session(&http, &url).await;
        let reply = call(&http, &url, &session, 2, json!({"method": "tools/list"})).await;

        let tools = reply["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 16);
        assert_eq!(tools[0]["name"], "list_meetings");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");

        let reply = call(&http, &url, &session, 3, json!({"method": "ping"})).await;
        assert_eq!(reply["result"], json!({}));
    }

    #[tokio::test]
    async fn test_request_without_session_is_refused() {
        let base = spawn_app(server_with_base("http://127.0.0.1:1"), "/mcp").await;
        let http = reqwest::Client::new();

        let response = post(
            &http,
            &format!("{}/mcp", base),
            None,
            json!({"jsonrpc": "2.0", "id": 7, "method": "tools/list"}),
        )
        .send()
        .await
        .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_tools_call_success() {
        let mock = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/meetings/m1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "m1"})))
            .expect(1)
            .mount(&mock)
            .await;

        let base = spawn_app(server_with_base(&mock.uri()), "/mcp").await;
        let url = format!("{}/mcp", base);
        let http = reqwest::Client::new();
        let session = open_session(&http, &url).await;

        let reply = call(
            &http,
            &url,
            &session,
            2,
            json!({
                "method": "tools/call",
                "params": {"name": "get_meeting_details", "arguments": {"meeting_id": "m1"}}
            }),
        )
        .await;

        let result = &reply["result"];
        assert_eq!(result["content"][0]["text"], "{\n  \"id\": \"m1\"\n}");
        assert_ne!(result["isError"], true);
    }

    #[tokio::test]
    async fn test_tools_call_api_failure_is_tool_error() {
        let mock = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/meetings/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .expect(1)
            .mount(&mock)
            .await;

        let base = spawn_app(server_with_base(&mock.uri()), "/mcp").await;
        let url = format!("{}/mcp", base);
        let http = reqwest::Client::new();
        let session = open_session(&http, &url).await;

        let reply = call(
            &http,
            &url,
            &session,
            2,
            json!({
                "method": "tools/call",
                "params": {"name": "get_meeting_details", "arguments": {"meeting_id": "missing"}}
            }),
        )
        .await;

        assert!(reply.get("error").is_none());
        assert_eq!(reply["result"]["isError"], true);
        let text = reply["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("API request failed:"));
        assert!(text.contains("404"));
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let base = spawn_app(server_with_base("http://127.0.0.1:1"), "/mcp").await;
        let url = format!("{}/mcp", base);
        let http = reqwest::Client::new();
        let session = open_session(&http, &url).await;

        let reply = call(
            &http,
            &url,
            &session,
            2,
            json!({"method": "tools/call", "params": {"name": "nope", "arguments": {}}}),
        )
        .await;
        assert!(reply["error"]["code"].is_i64());
        assert!(reply.get("result").is_none());

        let reply = call(
            &http,
            &url,
            &session,
            3,
            json!({
                "method": "tools/call",
                "params": {"name": "get_meeting_details", "arguments": {}}
            }),
        )
        .await;
        assert_eq!(reply["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_custom_endpoint_path() {
        let base = spawn_app(server_with_base("http://127.0.0.1:1"), "/api/mcp").await;
        let url = format!("{}/api/mcp", base);
        let http = reqwest::Client::new();

        let session = open_session(&http, &url).await;
        assert!(!session.is_empty());

        let root: Value = http.get(&base).send().await.unwrap().json().await.unwrap();
        assert_eq!(root["endpoints"]["mcp"], "/api/mcp");
    }

    #[tokio::test]
    async fn test_cors_exposes_session_header() {
        let base = spawn_app(server_with_base("http://127.0.0.1:1"), "/mcp").await;
        let http = reqwest::Client::new();

        let response = http
            .get(format!("{}/health", base))
            .header("Origin", "http://localhost:3000")
            .send()
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert!(response.headers().contains_key("access-control-expose-headers"));
    }
}
