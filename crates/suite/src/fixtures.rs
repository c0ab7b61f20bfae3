//! Per-test fixtures.
//!
//! Every test builds its own [`ApiFixture`], which owns a fresh HTTP client
//! (and, offline, its own stub server). Nothing is shared between tests, so
//! the harness is free to run them in parallel.

use std::sync::Arc;

use breedcheck_application::{BreedList, HttpClientError, RandomImage, RequestContext};
use breedcheck_domain::DomainError;
use breedcheck_infrastructure::{ApiConfig, ConfigError, ReqwestHttpClient, init_test_logging};
use thiserror::Error;

use crate::stub::DogApiStub;

/// Errors raised while setting up a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The environment configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] HttpClientError),

    /// The base URL cannot be used.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] DomainError),

    /// The stub server URI did not parse.
    #[error("invalid stub URI: {0}")]
    StubUri(#[from] url::ParseError),
}

/// Request wrappers bound to one request context.
#[derive(Debug)]
pub struct ApiFixture {
    context: RequestContext<ReqwestHttpClient>,
    stub: Option<DogApiStub>,
}

impl ApiFixture {
    /// Builds the fixture for the current target.
    ///
    /// With the `live-tests` feature the fixture talks to the service named
    /// by the environment; otherwise it starts a private stub.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or client setup fails.
    pub async fn start() -> Result<Self, FixtureError> {
        init_test_logging();
        if cfg!(feature = "live-tests") {
            Self::live()
        } else {
            Self::stubbed().await
        }
    }

    /// Targets the service configured through `DOG_API_*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or client setup fails.
    pub fn live() -> Result<Self, FixtureError> {
        Self::live_with(|key| std::env::var(key).ok())
    }

    fn live_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FixtureError> {
        let config = ApiConfig::from_lookup(lookup)?;
        Self::with_config(&config, None)
    }

    /// Starts a private stub and targets it.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub async fn stubbed() -> Result<Self, FixtureError> {
        let stub = DogApiStub::start().await;
        let config = ApiConfig::for_base_url(stub.base_url()?);
        Self::with_config(&config, Some(stub))
    }

    fn with_config(config: &ApiConfig, stub: Option<DogApiStub>) -> Result<Self, FixtureError> {
        let client = ReqwestHttpClient::new(config)?;
        let context = RequestContext::new(Arc::new(client), config.base_url.clone())?;
        Ok(Self { context, stub })
    }

    /// Wrapper for the breed listing endpoint.
    #[must_use]
    pub fn list_all(&self) -> BreedList<ReqwestHttpClient> {
        BreedList::new(self.context.clone())
    }

    /// Wrapper for the random image endpoints.
    #[must_use]
    pub fn random_image(&self) -> RandomImage<ReqwestHttpClient> {
        RandomImage::new(self.context.clone())
    }

    /// Returns the stub when running offline.
    #[must_use]
    pub const fn stub(&self) -> Option<&DogApiStub> {
        self.stub.as_ref()
    }

    /// Returns true when the fixture targets the real service.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.stub.is_none()
    }
}
