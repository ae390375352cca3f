//! `list_meetings` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for listing meetings.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListMeetingsParams {
    /// Type of meeting (meeting, webinar, personalRoomMeeting)
    #[serde(rename = "meetingType")]
    pub meeting_type: Option<String>,

    /// Meeting state (active, scheduled, ended, inProgress)
    pub state: Option<String>,

    /// Scheduled type (meeting, webinar)
    #[serde(rename = "scheduledType")]
    pub scheduled_type: Option<String>,

    /// List only current user's meetings
    pub current: Option<bool>,

    /// Start date (ISO 8601 format)
    pub from_date: Option<String>,

    /// End date (ISO 8601 format)
    pub to_date: Option<String>,

    /// Maximum number of meetings to return (1-100)
    pub max: Option<u32>,
}

/// Lists meetings visible to the authenticated user.
pub struct ListMeetingsTool;

impl ListMeetingsTool {
    pub fn request(params: &ListMeetingsParams) -> ApiRequest {
        ApiRequest::get("/meetings").query(
            FieldSet::new()
                .text("meetingType", params.meeting_type.as_deref())
                .text("state", params.state.as_deref())
                .text("scheduledType", params.scheduled_type.as_deref())
                .flag("current", params.current)
                .text("from", params.from_date.as_deref())
                .text("to", params.to_date.as_deref())
                .count("max", params.max),
        )
    }
}

#[async_trait]
impl WebexTool for ListMeetingsTool {
    type Params = ListMeetingsParams;

    const NAME: &'static str = "list_meetings";

    const DESCRIPTION: &'static str = "List meetings for the authenticated user.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let result = client.execute(Self::request(&params)).await?;
        Ok(ToolOutput::Json(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::{call, client_for, is_error, text};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_date_arguments_map_to_wire_keys() {
        let params = ListMeetingsParams {
            from_date: Some("2024-01-01T00:00:00Z".to_string()),
            to_date: Some("2024-02-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let query = ListMeetingsTool::request(&params).query.unwrap();
        assert!(query.contains_key("from"));
        assert!(query.contains_key("to"));
        assert!(!query.contains_key("from_date"));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_no_arguments_means_empty_query() {
        let query = ListMeetingsTool::request(&ListMeetingsParams::default())
            .query
            .unwrap();
        assert!(query.is_empty());
    }

    #[tokio::test]
    async fn test_list_meetings() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/meetings"))
            .and(query_param("meetingType", "webinar"))
            .and(query_param("current", "false"))
            .and(query_param("max", "10"))
            .and(query_param_is_missing("state"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": "m1"}]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = call::<ListMeetingsTool>(
            &client,
            json!({"meetingType": "webinar", "current": false, "max": 10}),
        )
        .await;

        assert!(!is_error(&result));
        let parsed: serde_json::Value = serde_json::from_str(&text(&result)).unwrap();
        assert_eq!(parsed["items"][0]["id"], "m1");
    }
}
