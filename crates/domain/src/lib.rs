//! Breedcheck Domain - Core types
//!
//! This crate defines the request, response and payload types used by the
//! breedcheck API suite, together with the validation predicates applied to
//! responses. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod payload;
pub mod request;
pub mod response;
pub mod validators;

pub use error::{DomainError, DomainResult};
pub use payload::{ApiStatus, BreedsListResponse, ErrorResponse, RandomImageResponse};
pub use request::{ApiRequest, HttpMethod};
pub use response::{ApiResponse, StatusCode};
