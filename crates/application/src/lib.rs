//! Breedcheck Application - Request wrappers and ports
//!
//! This crate defines the application layer with:
//! - The `HttpClient` port implemented by the infrastructure adapter
//! - `RequestContext`, an HTTP client bound to a base URL
//! - The `BreedList` and `RandomImage` request wrappers used by tests

pub mod context;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;

pub use context::RequestContext;
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpClient, HttpClientError};
pub use services::{BreedList, RandomImage};
