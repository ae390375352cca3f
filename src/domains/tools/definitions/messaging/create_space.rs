//! `create_space` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for creating a space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateSpaceParams {
    /// Space title
    pub title: String,

    /// Team ID to create space in
    #[serde(rename = "teamId")]
    pub team_id: Option<String>,

    /// Classification ID
    #[serde(rename = "classificationId")]
    pub classification_id: Option<String>,

    /// Whether space is locked
    #[serde(rename = "isLocked")]
    pub is_locked: Option<bool>,

    /// Whether space is public
    #[serde(rename = "isPublic")]
    pub is_public: Option<bool>,

    /// Space description
    pub description: Option<String>,
}

/// Creates a new space.
pub struct CreateSpaceTool;

#[async_trait]
impl WebexTool for CreateSpaceTool {
    type Params = CreateSpaceParams;

    const NAME: &'static str = "create_space";

    const DESCRIPTION: &'static str = "Create a new space.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let body = FieldSet::new()
            .with("title", params.title.as_str())
            .text("teamId", params.team_id.as_deref())
            .text("classificationId", params.classification_id.as_deref())
            .flag("isLocked", params.is_locked)
            .flag("isPublic", params.is_public)
            .text("description", params.description.as_deref());

        let result = client.execute(ApiRequest::post("/rooms").body(body)).await?;
        Ok(ToolOutput::Json(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::{call, client_for, is_error, text};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_space() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rooms"))
            .and(body_json(json!({"title": "Launch", "isLocked": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "room-7", "title": "Launch"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = call::<CreateSpaceTool>(
            &client,
            json!({"title": "Launch", "isLocked": true, "description": ""}),
        )
        .await;

        assert!(!is_error(&result));
        assert!(text(&result).contains("room-7"));
    }
}
