//! `delete_meeting` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for deleting a meeting.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteMeetingParams {
    /// The meeting ID
    pub meeting_id: String,

    /// Send email notification
    #[serde(rename = "sendEmail")]
    pub send_email: Option<bool>,
}

/// Deletes a meeting.
pub struct DeleteMeetingTool;

#[async_trait]
impl WebexTool for DeleteMeetingTool {
    type Params = DeleteMeetingParams;

    const NAME: &'static str = "delete_meeting";

    const DESCRIPTION: &'static str = "Delete a meeting.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let request = ApiRequest::delete("/meetings")
            .segment(params.meeting_id.as_str())
            .query(FieldSet::new().flag("sendEmail", params.send_email));

        client.execute(request).await?;
        Ok(ToolOutput::Text(format!(
            "Meeting {} deleted successfully",
            params.meeting_id
        )))
    }
}
