//! `list_spaces` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for listing spaces.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListSpacesParams {
    /// Filter by team ID
    #[serde(rename = "teamId")]
    pub team_id: Option<String>,

    /// Space type (direct, group)
    #[serde(rename = "type")]
    pub space_type: Option<String>,

    /// Sort by (id, lastactivity, created)
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,

    /// Maximum number of spaces to return
    pub max: Option<u32>,
}

/// Lists the spaces (rooms) the user belongs to.
pub struct ListSpacesTool;

#[async_trait]
impl WebexTool for ListSpacesTool {
    type Params = ListSpacesParams;

    const NAME: &'static str = "list_spaces";

    const DESCRIPTION: &'static str = "List spaces (rooms) the user is a member of.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let query = FieldSet::new()
            .text("teamId", params.team_id.as_deref())
            .text("type", params.space_type.as_deref())
            .text("sortBy", params.sort_by.as_deref())
            .count("max", params.max);

        let result = client.execute(ApiRequest::get("/rooms").query(query)).await?;
        Ok(ToolOutput::Json(result))
    }
}
