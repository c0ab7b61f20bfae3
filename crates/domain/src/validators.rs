//! Validation predicates for service responses.
//!
//! The `validate_*` functions inspect untyped JSON so that they can check the
//! shape of a payload before anything is deserialized into a typed struct.

use serde_json::Value;
use url::Url;

use crate::payload::BreedsListResponse;

/// File extensions accepted as image URLs.
pub const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Returns true if `url` parses as an absolute URL.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Returns true if `url` contains a known image extension, ignoring case.
#[must_use]
pub fn is_image_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}

/// Checks the shape of a `breeds/list/all` payload.
///
/// The status must be `success` and `message` must be a JSON object.
#[must_use]
pub fn validate_breeds_list_response(data: &Value) -> bool {
    has_success_status(data) && data.get("message").is_some_and(Value::is_object)
}

/// Checks the shape of a random image payload.
///
/// The status must be `success` and `message` must be a string that is both
/// a valid URL and an image URL.
#[must_use]
pub fn validate_random_image_response(data: &Value) -> bool {
    has_success_status(data)
        && data
            .get("message")
            .and_then(Value::as_str)
            .is_some_and(|url| is_valid_url(url) && is_image_url(url))
}

/// Breed names in response order.
#[must_use]
pub fn extract_all_breeds(data: &BreedsListResponse) -> Vec<String> {
    data.breeds().map(str::to_owned).collect()
}

/// Sub-breeds of `breed`; empty when the breed is absent or has none.
#[must_use]
pub fn extract_sub_breeds(data: &BreedsListResponse, breed: &str) -> Vec<String> {
    data.sub_breeds(breed).to_vec()
}

/// JSON type name of `value`, as used in schema assertions.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn has_success_status(data: &Value) -> bool {
    data.get("status").and_then(Value::as_str) == Some("success")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const IMAGE: &str = "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg";

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url(IMAGE));
        assert!(is_valid_url("http://localhost:8080/x"));
        assert!(!is_valid_url("images.dog.ceo/breeds/x.jpg"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_is_image_url() {
        assert!(is_image_url(IMAGE));
        assert!(is_image_url("https://x/y.JPEG"));
        assert!(is_image_url("https://x/y.png?size=2"));
        assert!(is_image_url("https://x/y.webp"));
        assert!(!is_image_url("https://x/y.txt"));
        assert!(!is_image_url("https://x/jpg"));
    }

    #[test]
    fn test_validate_breeds_list_response() {
        assert!(validate_breeds_list_response(&json!({
            "status": "success",
            "message": {"hound": ["afghan"], "pug": []}
        })));
        assert!(validate_breeds_list_response(&json!({
            "status": "success",
            "message": {}
        })));
        assert!(!validate_breeds_list_response(&json!({
            "status": "success",
            "message": ["hound"]
        })));
        assert!(!validate_breeds_list_response(&json!({
            "status": "success",
            "message": null
        })));
        assert!(!validate_breeds_list_response(&json!({
            "status": "error",
            "message": {}
        })));
        assert!(!validate_breeds_list_response(&json!({"status": "success"})));
    }

    #[test]
    fn test_validate_random_image_response() {
        assert!(validate_random_image_response(&json!({
            "status": "success",
            "message": IMAGE
        })));
        assert!(!validate_random_image_response(&json!({
            "status": "success",
            "message": "https://images.dog.ceo/breeds/hound/readme.txt"
        })));
        assert!(!validate_random_image_response(&json!({
            "status": "success",
            "message": "/breeds/hound/1.jpg"
        })));
        assert!(!validate_random_image_response(&json!({
            "status": "success",
            "message": 42
        })));
        assert!(!validate_random_image_response(&json!({
            "status": "error",
            "message": IMAGE
        })));
    }

    #[test]
    fn test_extract_breeds() {
        let data: BreedsListResponse = serde_json::from_value(json!({
            "status": "success",
            "message": {"beagle": [], "retriever": ["golden", "curly"]}
        }))
        .unwrap();

        assert_eq!(extract_all_breeds(&data), vec!["beagle", "retriever"]);
        assert_eq!(extract_sub_breeds(&data, "retriever"), vec!["golden", "curly"]);
        assert_eq!(extract_sub_breeds(&data, "beagle"), Vec::<String>::new());
        assert_eq!(extract_sub_breeds(&data, "dingo"), Vec::<String>::new());
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!("x")), "string");
        assert_eq!(value_kind(&json!({})), "object");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(1)), "number");
        assert_eq!(value_kind(&json!(true)), "boolean");
    }
}
