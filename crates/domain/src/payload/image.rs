use serde::{Deserialize, Serialize};

use super::ApiStatus;

/// Payload of `GET breeds/image/random` and `GET breed/{breed}/images/random`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomImageResponse {
    /// Status discriminator.
    pub status: ApiStatus,
    /// Image URL.
    pub message: String,
}

impl RandomImageResponse {
    /// Returns true if the image URL mentions `breed`, ignoring case.
    ///
    /// Image paths embed the breed directory (`breeds/hound-afghan/...`), so
    /// a sub-breed image still matches its parent breed.
    #[must_use]
    pub fn mentions_breed(&self, breed: &str) -> bool {
        self.message
            .to_lowercase()
            .contains(&breed.to_lowercase())
    }
}
