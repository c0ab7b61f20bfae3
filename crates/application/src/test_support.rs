//! In-memory `HttpClient` used by unit tests.

use std::collections::HashMap;
use std::future::{Future, ready};
use std::sync::Mutex;
use std::time::Duration;

use breedcheck_domain::{ApiRequest, ApiResponse};

use crate::ports::{HttpClient, HttpClientError};

type Responder = Box<dyn Fn(&ApiRequest) -> Result<ApiResponse, HttpClientError> + Send + Sync>;

/// Records every request and answers through a responder function.
pub struct RecordingClient {
    responder: Responder,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingClient {
    pub fn new(
        responder: impl Fn(&ApiRequest) -> Result<ApiResponse, HttpClientError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn always(status: u16, body: &'static str) -> Self {
        Self::new(move |_| Ok(json_response(status, body)))
    }

    pub fn failing() -> Self {
        Self::new(|_| Err(HttpClientError::ConnectionFailed("connection reset".to_string())))
    }

    #[allow(clippy::unwrap_used)]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn json_response(status: u16, body: &str) -> ApiResponse {
    ApiResponse::new(
        status,
        HashMap::from([("content-type".to_string(), "application/json".to_string())]),
        body.as_bytes().to_vec(),
        Duration::from_millis(5),
    )
}

impl HttpClient for RecordingClient {
    #[allow(clippy::unwrap_used)]
    fn execute(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, HttpClientError>> + Send {
        self.requests.lock().unwrap().push(request.clone());
        ready((self.responder)(request))
    }
}
