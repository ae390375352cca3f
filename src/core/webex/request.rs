//! Request descriptors for the Webex REST API.
//!
//! An [`ApiRequest`] is built fresh for every tool invocation and consumed by
//! [`WebexClient::execute`](super::WebexClient::execute). Query strings and
//! JSON bodies are both assembled from a [`FieldSet`], whose insert helpers
//! drop absent values so that unsupplied arguments never reach the wire.

use serde::Serialize;
use reqwest::Url;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::error::ApiError;

/// HTTP methods accepted by the Webex bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// GET and DELETE carry query parameters; POST and PUT carry a body.
    pub fn uses_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(ApiError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered string-keyed JSON fields used for query strings and bodies.
///
/// Strings that are absent or empty, and counts that are absent or zero, are
/// treated as "not supplied" and skipped. Booleans are kept whenever they are
/// present, `false` included.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldSet(Map<String, Value>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unconditionally.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Insert a string when it is present and non-empty.
    pub fn text(self, key: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Insert a boolean when it is present.
    pub fn flag(self, key: &str, value: Option<bool>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Insert a count when it is present and non-zero.
    pub fn count(self, key: &str, value: Option<u32>) -> Self {
        match value.filter(|v| *v != 0) {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Convert into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// A single Webex API call: method, path segments and optional query/body.
///
/// The path is kept as raw segments. Each one is percent-encoded on its own
/// when the URL is built, so caller-supplied identifiers can never add,
/// remove or escape a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: Vec<String>,
    pub query: Option<FieldSet>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Start a request on a fixed endpoint such as `/meetings`.
    pub fn new(method: HttpMethod, endpoint: &str) -> Self {
        Self {
            method,
            path: split_endpoint(endpoint),
            query: None,
            body: None,
        }
    }

    pub fn get(endpoint: &str) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    pub fn post(endpoint: &str) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    pub fn put(endpoint: &str) -> Self {
        Self::new(HttpMethod::Put, endpoint)
    }

    pub fn delete(endpoint: &str) -> Self {
        Self::new(HttpMethod::Delete, endpoint)
    }

    /// Append one path segment verbatim, typically a resource ID.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.path.push(segment.into());
        self
    }

    /// Attach query parameters (only sent for GET and DELETE).
    pub fn query(mut self, query: FieldSet) -> Self {
        self.query = Some(query);
        self
    }

    /// Attach a JSON body (only sent for POST and PUT).
    pub fn body(mut self, body: FieldSet) -> Self {
        self.body = Some(body.into_value());
        self
    }
}

/// Split a fixed endpoint on `/`, dropping empty pieces.
pub(crate) fn split_endpoint(endpoint: &str) -> Vec<String> {
    endpoint
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append `segments` to `base`, encoding each one as a single path segment.
///
/// Empty, `.` and `..` segments are refused: URL resolution would drop or
/// collapse them and the call would land on a different resource.
pub fn build_url(base: &Url, segments: &[String]) -> Result<Url, ApiError> {
    if let Some(bad) = segments
        .iter()
        .find(|s| s.is_empty() || s.as_str() == "." || s.as_str() == "..")
    {
        return Err(ApiError::InvalidPath(format!("{:?} is not a valid path segment", bad)));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidPath(format!("{} cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
