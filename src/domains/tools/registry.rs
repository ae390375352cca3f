//! Tool Registry - central registration of all tools.
//!
//! This module provides:
//! - The catalog of available tools, in order and grouped for display
//! - Tool metadata for listing
//! - The handlers the rmcp router is built from

use std::fmt;
use std::sync::Arc;

use rmcp::model::Tool;

use super::definitions::{
    AddMemberToSpaceTool, AddParticipantsTool, CreateMeetingTool, CreateSpaceTool,
    DeleteMeetingTool, GetMeetingDetailsTool, GetMeetingTranscriptTool, GetMessagesTool,
    GetRecordingTool, ListMeetingsTool, ListParticipantsTool, ListRecordingsTool,
    ListSpacesTool, RemoveParticipantsTool, SendMessageTool, UpdateMeetingTool,
};
use super::handlers::{ToolAdapter, ToolHandler};
use crate::core::webex::WebexClient;

/// Display grouping of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolGroup {
    /// Meetings, recordings and participants.
    Meetings,
    /// Spaces, messages and memberships.
    Messaging,
}

impl ToolGroup {
    pub const ALL: [ToolGroup; 2] = [ToolGroup::Meetings, ToolGroup::Messaging];
}

impl fmt::Display for ToolGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meetings => f.write_str("Meetings"),
            Self::Messaging => f.write_str("Messaging"),
        }
    }
}

fn entry<T: super::handlers::WebexTool>(group: ToolGroup) -> (ToolGroup, Arc<dyn ToolHandler>) {
    (group, Arc::new(ToolAdapter::<T>::new()))
}

/// Every tool, in catalog order.
fn catalog() -> Vec<(ToolGroup, Arc<dyn ToolHandler>)> {
    use ToolGroup::{Meetings, Messaging};

    vec![
        entry::<ListMeetingsTool>(Meetings),
        entry::<GetMeetingDetailsTool>(Meetings),
        entry::<GetMeetingTranscriptTool>(Meetings),
        entry::<GetRecordingTool>(Meetings),
        entry::<ListRecordingsTool>(Meetings),
        entry::<CreateMeetingTool>(Meetings),
        entry::<UpdateMeetingTool>(Meetings),
        entry::<DeleteMeetingTool>(Meetings),
        entry::<AddParticipantsTool>(Meetings),
        entry::<RemoveParticipantsTool>(Meetings),
        entry::<ListParticipantsTool>(Meetings),
        entry::<ListSpacesTool>(Messaging),
        entry::<GetMessagesTool>(Messaging),
        entry::<SendMessageTool>(Messaging),
        entry::<CreateSpaceTool>(Messaging),
        entry::<AddMemberToSpaceTool>(Messaging),
    ]
}

/// Tool registry - manages all available tools.
///
/// Built once at startup and shared read-only by every transport.
pub struct ToolRegistry {
    client: Arc<WebexClient>,
    entries: Vec<(ToolGroup, Arc<dyn ToolHandler>)>,
}

impl ToolRegistry {
    /// Create a new tool registry bound to the shared API client.
    pub fn new(client: Arc<WebexClient>) -> Self {
        Self {
            client,
            entries: catalog(),
        }
    }

    /// The API client every tool call goes through.
    pub fn client(&self) -> &Arc<WebexClient> {
        &self.client
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.handlers().map(|handler| handler.name()).collect()
    }

    /// Names of the tools in `group`, in catalog order.
    pub fn names_in(&self, group: ToolGroup) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(g, _)| *g == group)
            .map(|(_, handler)| handler.name())
            .collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.handlers().map(|handler| handler.to_tool()).collect()
    }

    /// Handlers in catalog order.
    pub fn handlers(&self) -> impl Iterator<Item = &Arc<dyn ToolHandler>> {
        self.entries.iter().map(|(_, handler)| handler)
    }
}
