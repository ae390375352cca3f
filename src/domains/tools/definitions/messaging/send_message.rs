//! `send_message` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::definitions::common::{is_supplied, parse_json_list};
use crate::domains::tools::handlers::{MalformedArgument, ToolOutput, WebexTool};

/// Parameters for sending a message.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SendMessageParams {
    /// The space/room ID to send message to
    #[serde(rename = "roomId")]
    pub room_id: Option<String>,

    /// Person ID for direct message
    #[serde(rename = "toPersonId")]
    pub to_person_id: Option<String>,

    /// Person email for direct message
    #[serde(rename = "toPersonEmail")]
    pub to_person_email: Option<String>,

    /// Message text content
    pub text: Option<String>,

    /// Message markdown content
    pub markdown: Option<String>,

    /// Message HTML content
    pub html: Option<String>,

    /// JSON array of file URLs to attach
    pub files: Option<String>,
}

/// Posts a message to a space or directly to a person.
pub struct SendMessageTool;

impl SendMessageTool {
    /// Validate the destination and content groups, then build the request.
    pub fn request(params: &SendMessageParams) -> Result<ApiRequest, MalformedArgument> {
        if ![&params.room_id, &params.to_person_id, &params.to_person_email]
            .into_iter()
            .any(is_supplied)
        {
            return Err(MalformedArgument::MissingDestination);
        }

        if ![&params.text, &params.markdown, &params.html]
            .into_iter()
            .any(is_supplied)
        {
            return Err(MalformedArgument::MissingContent);
        }

        let mut body = FieldSet::new()
            .text("roomId", params.room_id.as_deref())
            .text("toPersonId", params.to_person_id.as_deref())
            .text("toPersonEmail", params.to_person_email.as_deref())
            .text("text", params.text.as_deref())
            .text("markdown", params.markdown.as_deref())
            .text("html", params.html.as_deref());

        if let Some(files) = params.files.as_deref().filter(|v| !v.is_empty()) {
            body = body.with("files", parse_json_list(files, "files")?);
        }

        Ok(ApiRequest::post("/messages").body(body))
    }
}

#[async_trait]
impl WebexTool for SendMessageTool {
    type Params = SendMessageParams;

    const NAME: &'static str = "send_message";

    const DESCRIPTION: &'static str = "Send a message to a space or person.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let request = match Self::request(&params) {
            Ok(request) => request,
            Err(reason) => return Ok(ToolOutput::Rejected(reason)),
        };

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

    #[test]
    fn test_missing_destination() {
        let params = SendMessageParams {
            text: Some("hello".to_string()),
            ..Default::default()
        };
        assert_eq!(
            SendMessageTool::request(&params),
            Err(MalformedArgument::MissingDestination)
        );
    }

    #[test]
    fn test_missing_content_for_any_destination() {
        for params in [
            SendMessageParams {
                room_id: Some("r".to_string()),
                ..Default::default()
            },
            SendMessageParams {
                to_person_id: Some("p".to_string()),
                ..Default::default()
            },
            SendMessageParams {
                to_person_email: Some("p@example.com".to_string()),
                ..Default::default()
            },
        ] {
            assert_eq!(
                SendMessageTool::request(&params),
                Err(MalformedArgument::MissingContent)
            );
        }
    }

    #[test]
    fn test_destination_checked_before_content() {
        assert_eq!(
            SendMessageTool::request(&SendMessageParams::default()),
            Err(MalformedArgument::MissingDestination)
        );
    }

    #[tokio::test]
    async fn test_send_markdown_to_person() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(body_json(json!({
                "toPersonEmail": "kai@example.com",
                "markdown": "**ship it**",
                "files": ["https://example.com/report.pdf"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "msg-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = call::<SendMessageTool>(
            &client,
            json!({
                "toPersonEmail": "kai@example.com",
                "markdown": "**ship it**",
                "files": r#"["https://example.com/report.pdf"]"#
            }),
        )
        .await;

        assert!(!is_error(&result));
        assert!(text(&result).contains("msg-1"));
    }

    #[tokio::test]
    async fn test_validation_errors_are_in_band() {
        let server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);

        let result = call::<SendMessageTool>(&client, json!({"text": "hello"})).await;
        assert!(!is_error(&result));
        assert_eq!(
            text(&result),
            "Error: Must specify roomId, toPersonId, or toPersonEmail"
        );

        let result = call::<SendMessageTool>(&client, json!({"roomId": "r1"})).await;
        assert_eq!(
            text(&result),
            "Error: Must specify text, markdown, or html content"
        );

        let result = call::<SendMessageTool>(
            &client,
            json!({"roomId": "r1", "text": "hi", "files": "https://example.com/a.png"}),
        )
        .await;
        assert_eq!(text(&result), "Error: Invalid JSON format for files");
    }
}
