//! Response specification type
//!
//! Contains the raw HTTP response returned by the request wrappers,
//! including status, headers, body bytes and timing.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is a 4xx client error status.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// Returns the canonical reason phrase for the codes this suite meets.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            301 => "Moved Permanently",
            302 => "Found",
            400 => "Bad Request",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Raw HTTP response.
///
/// Error statuses are carried as data; callers decide what a 404 means.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Vec<u8>,
    duration: Duration,
}

impl ApiResponse {
    /// Creates a new `ApiResponse` from raw response data.
    #[must_use]
    pub fn new(
        status: impl Into<StatusCode>,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status: status.into(),
            headers,
            body,
            duration,
        }
    }

    /// Returns the numeric HTTP status.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns the status as a `StatusCode`.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn ok(&self) -> bool {
        self.status.is_success()
    }

    /// Time between sending the request and receiving the full body.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedBody` if the body is not JSON of the
    /// expected shape.
    pub fn json<T: DeserializeOwned>(&self) -> DomainResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            DomainError::MalformedBody(format!(
                "{e} (status {}, body {:?})",
                self.status,
                preview(&self.body)
            ))
        })
    }

    /// Decodes the body into an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedBody` if the body is not JSON.
    pub fn json_value(&self) -> DomainResult<serde_json::Value> {
        self.json()
    }
}

fn preview(body: &[u8]) -> String {
    const LIMIT: usize = 100;
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > LIMIT {
        format!("{}...", text.chars().take(LIMIT).collect::<String>())
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response(status: u16, body: &str) -> ApiResponse {
        let headers = HashMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        ApiResponse::new(status, headers, body.as_bytes().to_vec(), Duration::from_millis(12))
    }

    #[test]
    fn test_status_code_classes() {
        assert!(StatusCode::new(200).is_success());
        assert!(!StatusCode::new(404).is_success());
        assert!(StatusCode::new(405).is_client_error());
        assert!(!StatusCode::new(503).is_client_error());
    }

    #[test]
    fn test_status_code_display() {
        assert_eq!(StatusCode::new(404).to_string(), "404 Not Found");
        assert_eq!(StatusCode::new(405).to_string(), "405 Method Not Allowed");
        assert_eq!(StatusCode::new(418).to_string(), "418 Unknown");
    }

    #[test]
    fn test_ok_follows_status() {
        assert!(response(200, "{}").ok());
        assert!(!response(404, "{}").ok());
        assert!(!response(405, "{}").ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let resp = response(200, "{}");
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }

    #[test]
    fn test_json_value() {
        let resp = response(404, r#"{"status":"error","message":"nope","code":404}"#);
        assert_eq!(
            resp.json_value().unwrap(),
            json!({"status": "error", "message": "nope", "code": 404})
        );
    }

    #[test]
    fn test_json_reports_malformed_body() {
        let resp = response(502, "<html>bad gateway</html>");
        let err = resp.json_value().unwrap_err();
        assert!(matches!(err, DomainError::MalformedBody(ref msg) if msg.contains("status 502")));
    }
}
