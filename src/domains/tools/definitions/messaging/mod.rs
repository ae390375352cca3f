//! Messaging tools: spaces, messages and memberships.

pub mod add_member_to_space;
pub mod create_space;
pub mod get_messages;
pub mod list_spaces;
pub mod send_message;

pub use add_member_to_space::{AddMemberToSpaceParams, AddMemberToSpaceTool};
pub use create_space::{CreateSpaceParams, CreateSpaceTool};
pub use get_messages::{GetMessagesParams, GetMessagesTool};
pub use list_spaces::{ListSpacesParams, ListSpacesTool};
pub use send_message::{SendMessageParams, SendMessageTool};
