//! Recording tools.

pub mod get_recording;
pub mod list_recordings;

pub use get_recording::{GetRecordingParams, GetRecordingTool};
pub use list_recordings::{ListRecordingsParams, ListRecordingsTool};
