//! Meeting tools: listing, details, transcripts and meeting lifecycle.

pub mod create_meeting;
pub mod delete_meeting;
pub mod get_meeting_details;
pub mod get_meeting_transcript;
pub mod list_meetings;
pub mod update_meeting;

pub use create_meeting::{CreateMeetingParams, CreateMeetingTool};
pub use delete_meeting::{DeleteMeetingParams, DeleteMeetingTool};
pub use get_meeting_details::{GetMeetingDetailsParams, GetMeetingDetailsTool};
pub use get_meeting_transcript::{GetMeetingTranscriptParams, GetMeetingTranscriptTool};
pub use list_meetings::{ListMeetingsParams, ListMeetingsTool};
pub use update_meeting::{UpdateMeetingParams, UpdateMeetingTool};
