//! `remove_participants` tool.
//!
//! Issues one DELETE per participant, in list order. The loop stops at the
//! first failure and earlier removals are not rolled back. The per-invitee
//! endpoint is a best-effort approximation of the platform API.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::core::webex::{ApiRequest, ApiResult, WebexClient};
use crate::domains::tools::definitions::common::{parse_json_list, path_segment};
use crate::domains::tools::handlers::{MalformedArgument, ToolOutput, WebexTool};

/// Parameters for removing participants from a meeting.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveParticipantsParams {
    /// The meeting ID
    pub meeting_id: String,

    /// JSON array of participant IDs to remove
    pub participant_ids: String,
}

/// Removes invitees from a meeting, one call per ID.
pub struct RemoveParticipantsTool;

#[async_trait]
impl WebexTool for RemoveParticipantsTool {
    type Params = RemoveParticipantsParams;

    const NAME: &'static str = "remove_participants";

    const DESCRIPTION: &'static str = "Remove participants from a meeting.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let ids = match parse_json_list(&params.participant_ids, "participant IDs") {
            Ok(ids) => ids,
            Err(reason) => return Ok(ToolOutput::Rejected(reason)),
        };

        // Every ID is checked before the first removal.
        let Some(ids) = ids.iter().map(path_segment).collect::<Option<Vec<_>>>() else {
            return Ok(ToolOutput::Rejected(MalformedArgument::InvalidJson(
                "participant IDs",
            )));
        };

        for id in ids {
            debug!("Removing participant {} from meeting {}", id, params.meeting_id);
            client
                .execute(
                    ApiRequest::delete("/meetings")
                        .segment(params.meeting_id.as_str())
                        .segment("invitees")
                        .segment(id),
                )
                .await?;
        }

        Ok(ToolOutput::Text("Participants removed successfully".to_string()))
    }
}
