//! Breedcheck Infrastructure - Adapters and implementations
//!
//! This crate provides the reqwest-backed implementation of the
//! `HttpClient` port, environment configuration, and logging setup.

pub mod adapters;
pub mod config;
pub mod logging;

pub use adapters::ReqwestHttpClient;
pub use config::{ApiConfig, ApiEnv, ConfigError, DEFAULT_BASE_URL};
pub use logging::{init_logging, init_test_logging};
