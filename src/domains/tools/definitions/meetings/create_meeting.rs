//! `create_meeting` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::definitions::common::parse_json_list;
use crate::domains::tools::handlers::{MalformedArgument, ToolOutput, WebexTool};

/// Parameters for creating a meeting.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateMeetingParams {
    /// Meeting title
    pub title: String,

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

    /// Auto record meeting
    #[serde(rename = "enabledAutoRecordMeeting")]
    pub enabled_auto_record_meeting: Option<bool>,

    /// Allow any user to be co-host
    #[serde(rename = "allowAnyUserToBeCoHost")]
    pub allow_any_user_to_be_co_host: Option<bool>,

    /// JSON array of invitee objects with email and optional displayName
    pub invitees: Option<String>,
}

/// Schedules a new meeting.
pub struct CreateMeetingTool;

impl CreateMeetingTool {
    pub fn request(params: &CreateMeetingParams) -> Result<ApiRequest, MalformedArgument> {
        let mut body = FieldSet::new()
            .with("title", params.title.as_str())
            .text("agenda", params.agenda.as_deref())
            .text("password", params.password.as_deref())
            .text("start", params.start.as_deref())
            .text("end", params.end.as_deref())
            .text("timezone", params.timezone.as_deref())
            .flag("enabledAutoRecordMeeting", params.enabled_auto_record_meeting)
            .flag("allowAnyUserToBeCoHost", params.allow_any_user_to_be_co_host);

        if let Some(invitees) = params.invitees.as_deref().filter(|v| !v.is_empty()) {
            body = body.with("invitees", parse_json_list(invitees, "invitees")?);
        }

        Ok(ApiRequest::post("/meetings").body(body))
    }
}

#[async_trait]
impl WebexTool for CreateMeetingTool {
    type Params = CreateMeetingParams;

    const NAME: &'static str = "create_meeting";

    const DESCRIPTION: &'static str = "Create a new meeting.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let request = match Self::request(&params) {
            Ok(request) => request,
            Err(reason) => return Ok(ToolOutput::Rejected(reason)),
        };

        let result = client.execute(request).await?;
        Ok(ToolOutput::Json(result))
    }
}
