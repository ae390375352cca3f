//! `get_messages` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for reading messages of a space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetMessagesParams {
    /// The space/room ID
    #[serde(rename = "roomId")]
    pub room_id: String,

    /// Filter messages that mention specific people
    #[serde(rename = "mentionedPeople")]
    pub mentioned_people: Option<String>,

    /// List messages before this date
    pub before: Option<String>,

    /// List messages before this message ID
    #[serde(rename = "beforeMessage")]
    pub before_message: Option<String>,

    /// Maximum number of messages to return
    pub max: Option<u32>,
}

/// Lists messages in a space.
pub struct GetMessagesTool;

#[async_trait]
impl WebexTool for GetMessagesTool {
    type Params = GetMessagesParams;

    const NAME: &'static str = "get_messages";

    const DESCRIPTION: &'static str = "Get messages from a space.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let query = FieldSet::new()
            .with("roomId", params.room_id.as_str())
            .text("mentionedPeople", params.mentioned_people.as_deref())
            .text("before", params.before.as_deref())
            .text("beforeMessage", params.before_message.as_deref())
            .count("max", params.max);

        let result = client.execute(ApiRequest::get("/messages").query(query)).await?;
        Ok(ToolOutput::Json(result))
    }
}
