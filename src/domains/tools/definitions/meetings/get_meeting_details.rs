//! `get_meeting_details` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for fetching one meeting.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetMeetingDetailsParams {
    /// The meeting ID
    pub meeting_id: String,

    /// Whether to show only current user info
    pub current: Option<bool>,
}

/// Fetches the details of a single meeting.
pub struct GetMeetingDetailsTool;

#[async_trait]
impl WebexTool for GetMeetingDetailsTool {
    type Params = GetMeetingDetailsParams;

    const NAME: &'static str = "get_meeting_details";

    const DESCRIPTION: &'static str = "Get detailed information about a specific meeting.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let request = ApiRequest::get("/meetings")
            .segment(params.meeting_id.as_str())
            .query(FieldSet::new().flag("current", params.current));

        let result = client.execute(request).await?;
        Ok(ToolOutput::Json(result))
    }
}
