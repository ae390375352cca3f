//! `list_recordings` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for listing recordings.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListRecordingsParams {
    /// Filter by meeting ID
    pub meeting_id: Option<String>,

    /// Start date (ISO 8601 format)
    pub from_date: Option<String>,

    /// End date (ISO 8601 format)
    pub to_date: Option<String>,

    /// Maximum number of recordings to return
    pub max: Option<u32>,
}

/// Lists recordings.
pub struct ListRecordingsTool;

#[async_trait]
impl WebexTool for ListRecordingsTool {
    type Params = ListRecordingsParams;

    const NAME: &'static str = "list_recordings";

    const DESCRIPTION: &'static str = "List recordings.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let query = FieldSet::new()
            .text("meetingId", params.meeting_id.as_deref())
            .text("from", params.from_date.as_deref())
            .text("to", params.to_date.as_deref())
            .count("max", params.max);

        let result = client.execute(ApiRequest::get("/recordings").query(query)).await?;
        Ok(ToolOutput::Json(result))
    }
}
