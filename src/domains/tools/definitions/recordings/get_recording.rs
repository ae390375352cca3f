//! `get_recording` tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::webex::{ApiRequest, ApiResult, WebexClient};
use crate::domains::tools::handlers::{ToolOutput, WebexTool};

/// Parameters for fetching a recording.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRecordingParams {
    /// The recording ID
    pub recording_id: String,
}

/// Fetches recording details.
pub struct GetRecordingTool;

#[async_trait]
impl WebexTool for GetRecordingTool {
    type Params = GetRecordingParams;

    const NAME: &'static str = "get_recording";

    const DESCRIPTION: &'static str = "Get recording details for a meeting.";

    async fn execute(client: &WebexClient, params: Self::Params) -> ApiResult<ToolOutput> {
        let request = ApiRequest::get("/recordings").segment(params.recording_id.as_str());
        let result = client.execute(request).await?;
        Ok(ToolOutput::Json(result))
    }
}
