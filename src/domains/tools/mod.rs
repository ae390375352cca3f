//! Tools domain module.
//!
//! Tools are the Webex operations MCP clients can invoke. Each one maps a
//! typed parameter struct onto a single REST call (or, for
//! `remove_participants`, one call per identifier).
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - `WebexTool` trait, type-erasing adapter and result helpers
//! - `registry.rs` - Tool catalog, grouping and metadata
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching `definitions/` group
//! 2. Define the params struct and implement `WebexTool`
//! 3. Export it from the group's `mod.rs` and `definitions/mod.rs`
//! 4. Add it to the catalog in `registry.rs`
//!
//! The router and both transports pick it up from the registry.

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::*;
pub use registry::{ToolGroup, ToolRegistry};
pub use router::build_tool_router;
