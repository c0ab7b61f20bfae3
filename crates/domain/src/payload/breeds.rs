use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ApiStatus;

/// Payload of `GET breeds/list/all`.
///
/// `message` keeps the order in which the service lists breeds, so the first
/// key is the first breed on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedsListResponse {
    /// Status discriminator.
    pub status: ApiStatus,
    /// Breed name to its sub-breeds (possibly empty).
    pub message: IndexMap<String, Vec<String>>,
}

impl BreedsListResponse {
    /// Breed names in response order.
    pub fn breeds(&self) -> impl Iterator<Item = &str> {
        self.message.keys().map(String::as_str)
    }

    /// Sub-breeds of `breed`, empty when the breed is unknown or has none.
    #[must_use]
    pub fn sub_breeds(&self, breed: &str) -> &[String] {
        self.message.get(breed).map(Vec::as_slice).unwrap_or_default()
    }

    /// First breed listed by the service.
    #[must_use]
    pub fn first_breed(&self) -> Option<&str> {
        self.message.keys().next().map(String::as_str)
    }

    /// Returns true if `breed` is listed.
    #[must_use]
    pub fn contains(&self, breed: &str) -> bool {
        self.message.contains_key(breed)
    }
}
