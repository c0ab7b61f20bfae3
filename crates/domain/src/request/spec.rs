//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;

use super::HttpMethod;

/// A single HTTP exchange to perform against the remote service.
///
/// The URL is always absolute; relative endpoints are resolved against the
/// base URL before a request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: Url,
    /// Optional JSON body, sent with `Content-Type: application/json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a request without a body.
    #[must_use]
    pub const fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    /// Creates a GET request for the given URL.
    #[must_use]
    pub const fn get(url: Url) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a POST request carrying an optional JSON body.
    #[must_use]
    pub const fn post(url: Url, body: Option<serde_json::Value>) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            body,
        }
    }
}
