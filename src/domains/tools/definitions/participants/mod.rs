//! Meeting participant tools.

pub mod add_participants;
pub mod list_participants;
pub mod remove_participants;

pub use add_participants::{AddParticipantsParams, AddParticipantsTool};
pub use list_participants::{ListParticipantsParams, ListParticipantsTool};
pub use remove_participants::{RemoveParticipantsParams, RemoveParticipantsTool};
