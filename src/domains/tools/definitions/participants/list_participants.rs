//! `list_participants` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for listing meeting participants.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListParticipantsParams {
    /// The meeting ID
    pub meeting_id: String,

    /// Filter participants who joined before this time
    #[serde(rename = "joinedBefore")]
    pub joined_before: Option<String>,

    /// Filter participants who joined after this time
    #[serde(rename = "joinedAfter")]
    pub joined_after: Option<String>,

    /// Maximum number of participants to return
    pub max: Option<u32>,
}

/// Lists participants of a meeting.
pub struct ListParticipantsTool;

#[async_trait]
impl WebexTool for ListParticipantsTool {
    type Params = ListParticipantsParams;

    const NAME: &'static str = "list_participants";

    const DESCRIPTION: &'static str = "List participants of a meeting.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let query = FieldSet::new()
            .text("joinedBefore", params.joined_before.as_deref())
            .text("joinedAfter", params.joined_after.as_deref())
            .count("max", params.max);

        let request =
            ApiRequest::get("/meetings")
                .segment(params.meeting_id.as_str())
                .segment("participants")
                .query(query);
        let result = client.execute(request).await?;
        Ok(ToolOutput::Json(result))
    }
}
