//! Response payloads published by the dog-breed image service.
//!
//! These shapes are owned by the remote service; they are modelled here only
//! as far as the suite needs to read them.

mod breeds;
mod error;
mod image;

pub use breeds::BreedsListResponse;
pub use error::ErrorResponse;
pub use image::RandomImageResponse;

use serde::{Deserialize, Serialize};

/// Status discriminator carried by every payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    /// The request was served.
    Success,
    /// The request failed; `message` explains why.
    Error,
}

impl ApiStatus {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
