//! Request context: an HTTP client bound to a base URL.

use std::sync::Arc;

use breedcheck_domain::{ApiRequest, ApiResponse, DomainError, DomainResult};
use serde_json::Value;
use url::Url;

use crate::error::ApplicationResult;
use crate::ports::HttpClient;

/// HTTP client plus the base URL every endpoint is resolved against.
///
/// Request wrappers hold a context and hand back raw responses. Cloning is
/// cheap and shares the underlying client.
#[derive(Debug)]
pub struct RequestContext<C: HttpClient> {
    client: Arc<C>,
    base_url: Url,
}

impl<C: HttpClient> Clone for RequestContext<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            base_url: self.base_url.clone(),
        }
    }
}

impl<C: HttpClient> RequestContext<C> {
    /// Creates a context for `base_url`.
    ///
    /// A missing trailing slash is added so that endpoints are joined below
    /// the base path (`https://dog.ceo/api` resolves `breeds/list/all` to
    /// `https://dog.ceo/api/breeds/list/all`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if `base_url` cannot serve as a base.
    pub fn new(client: Arc<C>, base_url: Url) -> DomainResult<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `endpoint` against the base URL.
    ///
    /// Leading slashes are ignored so the base path is never replaced.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the joined URL is invalid.
    pub fn resolve(&self, endpoint: &str) -> DomainResult<Url> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {endpoint}")))
    }

    /// Issues `GET {endpoint}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or no response was received.
    pub async fn get(&self, endpoint: &str) -> ApplicationResult<ApiResponse> {
        let request = ApiRequest::get(self.resolve(endpoint)?);
        self.send(&request).await
    }

    /// Issues `POST {endpoint}` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or no response was received.
    pub async fn post(&self, endpoint: &str, data: Option<Value>) -> ApplicationResult<ApiResponse> {
        let request = ApiRequest::post(self.resolve(endpoint)?, data);
        self.send(&request).await
    }

    /// Executes an already-built request.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    pub async fn send(&self, request: &ApiRequest) -> ApplicationResult<ApiResponse> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.client.execute(request).await?;
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = response.status(),
            elapsed_ms = u64::try_from(response.duration().as_millis()).unwrap_or(u64::MAX),
            "received response"
        );
        Ok(response)
    }
}

fn normalize_base_url(mut url: Url) -> DomainResult<Url> {
    if url.cannot_be_a_base() {
        return Err(DomainError::InvalidUrl(format!(
            "{url} cannot be used as a base URL"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
