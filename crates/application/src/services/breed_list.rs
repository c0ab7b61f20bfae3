use breedcheck_domain::{ApiResponse, BreedsListResponse, ErrorResponse};
use serde_json::Value;

use crate::context::RequestContext;
use crate::error::ApplicationResult;
use crate::ports::HttpClient;

const LIST_ALL: &str = "breeds/list/all";

/// Wrapper around the breed listing endpoint.
#[derive(Debug, Clone)]
pub struct BreedList<C: HttpClient> {
    context: RequestContext<C>,
}

impl<C: HttpClient> BreedList<C> {
    /// Creates a wrapper over `context`.
    #[must_use]
    pub const fn new(context: RequestContext<C>) -> Self {
        Self { context }
    }

    /// Lists every breed with its sub-breeds: `GET breeds/list/all`.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    pub async fn get_all_breeds(&self) -> ApplicationResult<ApiResponse> {
        self.context.get(LIST_ALL).await
    }

    /// Decodes a `breeds/list/all` response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not have the breed-list shape.
    pub fn parse_breeds_list_response(
        &self,
        response: &ApiResponse,
    ) -> ApplicationResult<BreedsListResponse> {
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ApplicationError;
    use crate::test_support::{RecordingClient, json_response};
    use breedcheck_domain::{ApiStatus, DomainError, HttpMethod};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use url::Url;

    const CATALOG: &str = r#"{"message":{"affenpinscher":[],"bulldog":["boston","french"]},"status":"success"}"#;

    fn wrapper(client: RecordingClient) -> (BreedList<RecordingClient>, Arc<RecordingClient>) {
        let client = Arc::new(client);
        let context =
            RequestContext::new(Arc::clone(&client), Url::parse("https://dog.ceo/api/").unwrap())
                .unwrap();
        (BreedList::new(context), client)
    }

    #[tokio::test]
    async fn test_get_all_breeds_hits_list_endpoint() {
        let (breeds, client) = wrapper(RecordingClient::always(200, CATALOG));

        let response = breeds.get_all_breeds().await.unwrap();
        assert_eq!(response.status(), 200);

        let sent = client.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].url.as_str(), "https://dog.ceo/api/breeds/list/all");
    }

    #[tokio::test]
    async fn test_parse_breeds_list_response() {
        let (breeds, _) = wrapper(RecordingClient::always(200, CATALOG));

        let response = breeds.get_all_breeds().await.unwrap();
        let data = breeds.parse_breeds_list_response(&response).unwrap();
        assert_eq!(data.status, ApiStatus::Success);
        assert_eq!(data.first_breed(), Some("affenpinscher"));
        assert_eq!(data.sub_breeds("bulldog"), ["boston", "french"]);
    }

    #[tokio::test]
    async fn test_parse_rejects_error_payload() {
        let (breeds, _) = wrapper(RecordingClient::always(
            404,
            r#"{"status":"error","message":"No route found","code":404}"#,
        ));

        let response = breeds.get_custom_endpoint("breeds/list/invalid-endpoint").await.unwrap();
        assert!(!response.ok());
        let err = breeds.parse_breeds_list_response(&response).unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(DomainError::MalformedBody(_))));

        let error = breeds.parse_error_response(&response).unwrap();
        assert_eq!(error.status, ApiStatus::Error);
        assert_eq!(error.code, Some(404));
    }

    #[tokio::test]
    async fn test_post_to_endpoint_sends_body() {
        let (breeds, client) = wrapper(RecordingClient::new(|request| {
            assert_eq!(request.method, HttpMethod::Post);
            Ok(json_response(405, r#"{"status":"error","message":"Method Not Allowed"}"#))
        }));

        let response = breeds
            .post_to_endpoint("breeds/list/all", Some(json!({"test": "data"})))
            .await
            .unwrap();
        assert_eq!(response.status(), 405);
        assert_eq!(client.requests()[0].body, Some(json!({"test": "data"})));
    }
}
