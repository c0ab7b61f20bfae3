use breedcheck_domain::{ApiResponse, DomainError, ErrorResponse, RandomImageResponse};
use serde_json::Value;

use crate::context::RequestContext;
use crate::error::ApplicationResult;
use crate::ports::HttpClient;

const RANDOM_IMAGE: &str = "breeds/image/random";

/// Wrapper around the random image endpoints.
#[derive(Debug, Clone)]
pub struct RandomImage<C: HttpClient> {
    context: RequestContext<C>,
}

impl<C: HttpClient> RandomImage<C> {
    /// Creates a wrapper over `context`.
    #[must_use]
    pub const fn new(context: RequestContext<C>) -> Self {
        Self { context }
    }

    /// Random image of any breed: `GET breeds/image/random`.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    pub async fn get_random_image(&self) -> ApplicationResult<ApiResponse> {
        self.context.get(RANDOM_IMAGE).await
    }

    /// Random image of one breed: `GET breed/{breed}/images/random`.
    ///
    /// Unknown breeds are not rejected here; the service answers them with 404.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBreed` for a name that is not a single
    /// path segment (empty, `.`, `..`, or containing `/`, `?`, `#` or `%`),
    /// otherwise an error if no response was received.
    pub async fn get_random_image_by_breed(&self, breed: &str) -> ApplicationResult<ApiResponse> {
        let endpoint = breed_endpoint(breed)?;
        self.context.get(&endpoint).await
    }

    /// Decodes a random image response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not have the random-image shape.
    pub fn parse_random_image_response(
        &self,
        response: &ApiResponse,
    ) -> ApplicationResult<RandomImageResponse> {
        Ok(response.json()?)
    }

    /// Decodes the error payload of a failed response.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not an error payload.
    pub fn parse_error_response(&self, response: &ApiResponse) -> ApplicationResult<ErrorResponse> {
        super::parse_error(response)
    }

    /// Issues `GET {endpoint}`, for probing arbitrary paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or no response was received.
    pub async fn get_custom_endpoint(&self, endpoint: &str) -> ApplicationResult<ApiResponse> {
        self.context.get(endpoint).await
    }

    /// Issues `POST {endpoint}` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or no response was received.
    pub async fn post_to_endpoint(
        &self,
        endpoint: &str,
        data: Option<Value>,
    ) -> ApplicationResult<ApiResponse> {
        self.context.post(endpoint, data).await
    }
}

/// Builds `breed/{breed}/images/random`.
///
/// The name must stay a single path segment once joined onto the base URL.
/// URL parsing splits on `?` and `#`, resolves `.`, `..` and `%2e`, and
/// strips tabs and newlines.
fn breed_endpoint(breed: &str) -> Result<String, DomainError> {
    let unusable = breed.trim().is_empty()
        || matches!(breed, "." | "..")
        || breed.contains(['/', '\\', '?', '#', '%'])
        || breed.chars().any(char::is_control);
    if unusable {
        return Err(DomainError::InvalidBreed(breed.to_string()));
    }
    Ok(format!("breed/{breed}/images/random"))
}
