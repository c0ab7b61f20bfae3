//! In-process stand-in for the dog-breed image service.
//!
//! Mirrors the parts of the public REST surface the suite touches, including
//! the error payloads: unknown breeds and unknown routes answer 404, and every
//! method other than GET answers 405.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Map, Value, json};
use url::Url;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Breeds served by the stub, in listing order, with their sub-breeds.
pub const CATALOG: &[(&str, &[&str])] = &[
    ("affenpinscher", &[]),
    ("african", &[]),
    ("australian", &["kelpie", "shepherd"]),
    ("beagle", &[]),
    ("bulldog", &["boston", "english", "french"]),
    (
        "hound",
        &["afghan", "basset", "blood", "english", "ibizan", "plott", "walker"],
    ),
    ("pug", &[]),
    ("retriever", &["chesapeake", "curly", "flatcoated", "golden"]),
    ("terrier", &["american", "border", "cairn"]),
];

const IMAGE_HOST: &str = "https://images.dog.ceo/breeds";

/// A running stub server.
///
/// The server and its mounted routes are released when the stub is dropped.
pub struct DogApiStub {
    server: MockServer,
}

impl std::fmt::Debug for DogApiStub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DogApiStub")
            .field("uri", &self.server.uri())
            .finish()
    }
}

impl DogApiStub {
    /// Starts a stub with every route mounted.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let served = Arc::new(AtomicUsize::new(0));

        Mock::given(method("GET"))
            .and(path("/breeds/list/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(breed_list()))
            .mount(&server)
            .await;

        let counter = Arc::clone(&served);
        Mock::given(method("GET"))
            .and(path("/breeds/image/random"))
            .respond_with(move |_: &Request| {
                let n = counter.fetch_add(1, Ordering::Relaxed);
                let (breed, _) = CATALOG[n % CATALOG.len()];
                success(&image_url(breed, n))
            })
            .mount(&server)
            .await;

        let counter = Arc::clone(&served);
        Mock::given(method("GET"))
            .and(path_regex(r"^/breed/[^/]+/images/random$"))
            .respond_with(move |req: &Request| {
                let breed = req.url.path_segments().and_then(|mut s| s.nth(1)).unwrap_or("");
                if CATALOG.iter().any(|(name, _)| *name == breed) {
                    success(&image_url(breed, counter.fetch_add(1, Ordering::Relaxed)))
                } else {
                    error(404, "Breed not found (main breed does not exist)")
                }
            })
            .mount(&server)
            .await;

        // Anything but GET is rejected before route matching.
        Mock::given(|req: &Request| req.method.as_str() != "GET")
            .respond_with(|req: &Request| {
                error(
                    405,
                    &format!(
                        "No route found for \"{} {}\": Method Not Allowed (Allow: GET)",
                        req.method, req.url
                    ),
                )
            })
            .with_priority(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .respond_with(|req: &Request| {
                error(
                    404,
                    &format!("No route found for \"GET {}\" with code: 0", req.url),
                )
            })
            .with_priority(10)
            .mount(&server)
            .await;

        Self { server }
    }

    /// Root URI of the server, e.g. `http://127.0.0.1:40123`.
    #[must_use]
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Base URL to hand to a request context.
    ///
    /// # Errors
    ///
    /// Returns an error if the server URI does not parse.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}/", self.server.uri()))
    }

    /// Requests received so far, oldest first.
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

fn breed_list() -> Value {
    let message: Map<String, Value> = CATALOG
        .iter()
        .map(|(breed, subs)| ((*breed).to_string(), json!(subs)))
        .collect();
    json!({ "message": message, "status": "success" })
}

/// Image URL for `breed`; sub-breeds rotate with `n` the way the service
/// spreads images across `breed-sub` directories.
fn image_url(breed: &str, n: usize) -> String {
    let subs = CATALOG
        .iter()
        .find(|(name, _)| *name == breed)
        .map_or(&[][..], |(_, subs)| *subs);
    let dir = if subs.is_empty() {
        breed.to_string()
    } else {
        format!("{breed}-{}", subs[n % subs.len()])
    };
    format!("{IMAGE_HOST}/{dir}/n02{:06}_{n}.jpg", n * 7919 % 1_000_000)
}

fn success(url: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "message": url, "status": "success" }))
}

fn error(code: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(json!({
        "status": "error",
        "message": message,
        "code": code,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_breed_list_keeps_catalog_order() {
        let list = breed_list();
        let keys: Vec<&str> = list["message"]
            .as_object()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        let expected: Vec<&str> = CATALOG.iter().map(|(b, _)| *b).collect();
        assert_eq!(keys, expected);
        assert_eq!(list["message"]["bulldog"], json!(["boston", "english", "french"]));
        assert_eq!(list["message"]["pug"], json!([]));
    }

    #[tokio::test]
    async fn test_non_get_methods_answer_405() {
        let stub = DogApiStub::start().await;
        let client = reqwest::Client::new();

        for method in [reqwest::Method::HEAD, reqwest::Method::POST, reqwest::Method::DELETE] {
            let response = client
                .request(method.clone(), format!("{}/breeds/list/all", stub.uri()))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status().as_u16(), 405, "{method}");
        }

        let body: Value = client
            .put(format!("{}/no/such/route", stub.uri()))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], 405);
    }

    #[test]
    fn test_image_url_uses_breed_directory() {
        assert!(image_url("pug", 3).starts_with("https://images.dog.ceo/breeds/pug/"));
        assert!(image_url("hound", 1).starts_with("https://images.dog.ceo/breeds/hound-basset/"));
        assert!(image_url("hound", 1).ends_with(".jpg"));
        assert_ne!(image_url("pug", 1), image_url("pug", 2));
    }
}
