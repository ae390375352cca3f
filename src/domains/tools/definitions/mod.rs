//! Tool definitions module.
//!
//! One file per tool, grouped by Webex resource family.

pub mod common;
pub mod meetings;
pub mod messaging;
pub mod participants;
pub mod recordings;

#[cfg(test)]
pub(crate) mod testing;

pub use meetings::{
    CreateMeetingParams, CreateMeetingTool, DeleteMeetingParams, DeleteMeetingTool,
    GetMeetingDetailsParams, GetMeetingDetailsTool, GetMeetingTranscriptParams,
    GetMeetingTranscriptTool, ListMeetingsParams, ListMeetingsTool, UpdateMeetingParams,
    UpdateMeetingTool,
};
pub use messaging::{
    AddMemberToSpaceParams, AddMemberToSpaceTool, CreateSpaceParams, CreateSpaceTool,
    GetMessagesParams, GetMessagesTool, ListSpacesParams, ListSpacesTool, SendMessageParams,
    SendMessageTool,
};
pub use participants::{
    AddParticipantsParams, AddParticipantsTool, ListParticipantsParams, ListParticipantsTool,
    RemoveParticipantsParams, RemoveParticipantsTool,
};
pub use recordings::{
    GetRecordingParams, GetRecordingTool, ListRecordingsParams, ListRecordingsTool,
};
