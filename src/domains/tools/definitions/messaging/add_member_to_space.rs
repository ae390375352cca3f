//! `add_member_to_space` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, FieldSet, WebexClient};
use crate::domains::tools::definitions::common::is_supplied;
use crate::domains::tools::handlers::{MalformedArgument, ToolOutput, WebexTool};

/// Parameters for adding a member to a space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddMemberToSpaceParams {
    /// The space/room ID
    #[serde(rename = "roomId")]
    pub room_id: String,

    /// Person ID to add
    #[serde(rename = "personId")]
    pub person_id: Option<String>,

    /// Person email to add
    #[serde(rename = "personEmail")]
    pub person_email: Option<String>,

    /// Make person a moderator
    #[serde(rename = "isModerator")]
    pub is_moderator: Option<bool>,
}

/// Adds a person to a space.
pub struct AddMemberToSpaceTool;

#[async_trait]
impl WebexTool for AddMemberToSpaceTool {
    type Params = AddMemberToSpaceParams;

    const NAME: &'static str = "add_member_to_space";

    const DESCRIPTION: &'static str = "Add a member to a space.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        if !is_supplied(&params.person_id) && !is_supplied(&params.person_email) {
            return Ok(ToolOutput::Rejected(MalformedArgument::MissingPerson));
        }

        let body = FieldSet::new()
            .with("roomId", params.room_id.as_str())
            .text("personId", params.person_id.as_deref())
            .text("personEmail", params.person_email.as_deref())
            .flag("isModerator", params.is_moderator);

        let result = client.execute(ApiRequest::post("/memberships").body(body)).await?;
        Ok(ToolOutput::Json(result))
    }
}
