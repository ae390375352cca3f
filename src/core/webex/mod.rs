//! Webex REST API bridge.
//!
//! One generic authenticated request operation plus the request descriptor
//! types the tools use to describe their calls.

mod client;
mod error;
mod request;

pub use client::{DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS, WebexClient};
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, FieldSet, HttpMethod, build_url};
