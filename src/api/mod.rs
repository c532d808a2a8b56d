//! REST API Bindings
//!
//! Thin HTTP wrappers over the backend API, organized by domain.

mod categories;
mod foods;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

// Re-export all public items
pub use categories::*;
pub use foods::*;

/// Request header carrying the admin credential.
pub const AUTH_HEADER: &str = "auth-token";

/// How a request failed, from the caller's point of view.
///
/// `Display` is the user-facing toast text: the server message verbatim for
/// a rejected request, a generic fallback when no response arrived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with an error status and a `message` payload.
    #[error("{0}")]
    Server(String),
    /// No usable response: network failure or an undecodable body.
    #[error("An error occurred. Please try again later.")]
    Unreachable,
}

impl From<reqwest::Error> for ApiError {
    fn from(_: reqwest::Error) -> Self {
        ApiError::Unreachable
    }
}

/// Shared HTTP client plus the API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    /// Same-origin requests, the deployed layout.
    fn default() -> Self {
        Self::new("")
    }
}

/// `{ data: ... }` envelope used by list endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub(crate) data: T,
}

/// `{ message: ... }` envelope used by write acks and error payloads.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageEnvelope {
    pub(crate) message: String,
}

/// Decode a response body, or map it onto an [`ApiError`].
pub(crate) async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ApiError> {
    let status = res.status();
    if status.is_success() {
        return res.json::<T>().await.map_err(|_| ApiError::Unreachable);
    }
    match res.json::<MessageEnvelope>().await {
        Ok(body) => Err(ApiError::Server(body.message)),
        // Error status without the standard payload; keep the status visible.
        Err(_) => Err(ApiError::Server(format!("Request failed ({status})"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_its_message_verbatim() {
        let err = ApiError::Server("Category already exists".to_string());
        assert_eq!(err.to_string(), "Category already exists");
    }

    #[test]
    fn unreachable_displays_the_generic_fallback() {
        assert_eq!(
            ApiError::Unreachable.to_string(),
            "An error occurred. Please try again later."
        );
    }

    #[test]
    fn data_envelope_unwraps_the_payload() {
        let body: DataEnvelope<Vec<u32>> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(body.data, vec![1, 2, 3]);
    }

    #[test]
    fn message_envelope_ignores_extra_fields() {
        let body: MessageEnvelope =
            serde_json::from_str(r#"{"message":"Deleted","status":"ok"}"#).unwrap();
        assert_eq!(body.message, "Deleted");
    }
}
