use serde::{Deserialize, Serialize};

use super::ApiStatus;

/// Error payload returned with 4xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status discriminator, `error` on well-formed failures.
    pub status: ApiStatus,
    /// Human-readable reason.
    pub message: String,
    /// HTTP status echoed by the service, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}
