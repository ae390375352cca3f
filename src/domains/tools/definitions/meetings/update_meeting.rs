//! `update_meeting` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for updating a meeting.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateMeetingParams {
    /// The meeting ID
    pub meeting_id: String,

    /// Meeting title
    pub title: Option<String>,

    /// Meeting agenda
    pub agenda: Option<String>,

    /// Meeting password
    pub password: Option<String>,

    /// Start time (ISO 8601 format)
    pub start: Option<String>,

    /// End time (ISO 8601 format)
    pub end: Option<String>,

    /// Timezone
    pub timezone: Option<String>,
}

/// Updates an existing meeting.
pub struct UpdateMeetingTool;

#[async_trait]
impl WebexTool for UpdateMeetingTool {
    type Params = UpdateMeetingParams;

    const NAME: &'static str = "update_meeting";

    const DESCRIPTION: &'static str = "Update an existing meeting.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let body = FieldSet::new()
            .text("title", params.title.as_deref())
            .text("agenda", params.agenda.as_deref())
            .text("password", params.password.as_deref())
            .text("start", params.start.as_deref())
            .text("end", params.end.as_deref())
            .text("timezone", params.timezone.as_deref());

        let request = ApiRequest::put("/meetings")
            .segment(params.meeting_id.as_str())
            .body(body);
        let result = client.execute(request).await?;
        Ok(ToolOutput::Json(result))
    }
}
