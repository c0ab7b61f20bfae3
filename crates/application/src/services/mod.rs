//! Request wrappers for the dog-breed image service.
//!
//! Each wrapper owns a [`RequestContext`](crate::RequestContext) and returns
//! raw responses; parsing is a separate, explicit step so tests can assert on
//! the status before touching the body.

mod breed_list;
mod random_image;

pub use breed_list::BreedList;
pub use random_image::RandomImage;

use breedcheck_domain::{ApiResponse, ErrorResponse};

use crate::error::ApplicationResult;

/// Decodes the error payload that accompanies 4xx responses.
fn parse_error(response: &ApiResponse) -> ApplicationResult<ErrorResponse> {
    Ok(response.json()?)
}
