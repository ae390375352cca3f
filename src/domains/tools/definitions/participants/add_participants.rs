//! `add_participants` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::definitions::common::parse_json_list;
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for inviting participants to a meeting.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParticipantsParams {
    /// The meeting ID
    pub meeting_id: String,

    /// JSON array of participant objects with email and optional role
    pub participants: String,
}

/// Invites participants to a meeting.
pub struct AddParticipantsTool;

#[async_trait]
impl WebexTool for AddParticipantsTool {
    type Params = AddParticipantsParams;

    const NAME: &'static str = "add_participants";

    const DESCRIPTION: &'static str = "Add participants to a meeting.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let participants = match parse_json_list(&params.participants, "participants") {
            Ok(list) => list,
            Err(reason) => return Ok(ToolOutput::Rejected(reason)),
        };

        let request = ApiRequest::post("/meetings")
            .segment(params.meeting_id.as_str())
            .segment("invitees")
            .body(FieldSet::new().with("invitees", participants));

        let result = client.execute(request).await?;
        Ok(ToolOutput::Json(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::{call, client_for, is_error, text};
    use serde_json::json;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_add_participants_wraps_invitees() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/meetings/m1/invitees"))
            .and(body_json(json!({"invitees": [{"email": "bo@example.com", "role": "cohost"}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": "i1"}]})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = call::<AddParticipantsTool>(
            &client,
            json!({
                "meeting_id": "m1",
                "participants": r#"[{"email": "bo@example.com", "role": "cohost"}]"#
            }),
        )
        .await;

        assert!(!is_error(&result));
        assert!(text(&result).contains("\"i1\""));
    }

    #[tokio::test]
    async fn test_invalid_participants_makes_no_call() {
        let server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = call::<AddParticipantsTool>(
            &client,
            json!({"meeting_id": "m1", "participants": "bo@example.com"}),
        )
        .await;

        assert!(!is_error(&result));
        assert_eq!(text(&result), "Error: Invalid JSON format for participants");
    }
}
