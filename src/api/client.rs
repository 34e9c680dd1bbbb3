//! JSON API client
//!
//! Issues single GET/POST requests and returns the decoded JSON body, or an
//! error carrying the raw response text when the server answers with a
//! non-success status. Uses reqwest for HTTP and tokio for the async runtime.

use std::sync::OnceLock;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during an API request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-success status.
    ///
    /// Display is exactly the raw response body text; the numeric status
    /// rides along as metadata. Callers needing structured error data must
    /// parse the body themselves.
    #[error("{body}")]
    Status { status: u16, body: String },

    /// Network-level failure (DNS, connection refused, ...), passed through
    /// from the transport untranslated.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response reported success but its body was not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Thin JSON API client
///
/// Wraps a reqwest [`Client`] so connections can be reused across calls.
/// No retries, no timeouts, no authentication; every failure is the
/// caller's responsibility to handle.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// GET `url` and decode the response body as JSON
    ///
    /// A non-success status yields [`ApiError::Status`] whose message is the
    /// verbatim response text.
    pub async fn get(&self, url: &str) -> Result<Value, ApiError> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    /// POST `payload` to `url` as a JSON body
    ///
    /// Sends `Content-Type: application/json` and the serialized payload.
    /// Success/failure handling is identical to [`ApiClient::get`].
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<Value, ApiError> {
        log::debug!("POST {url}");
        let response = self.client.post(url).json(payload).send().await?;
        Self::read_json(response).await
    }

    /// POST with the serialized empty object `{}` as the body
    pub async fn post_empty(&self, url: &str) -> Result<Value, ApiError> {
        self.post(url, &Value::Object(serde_json::Map::new())).await
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        // Read the body as text first: on failure it becomes the error
        // message, on success it is decoded explicitly so a decode failure
        // is attributable.
        let body = response.text().await?;
        if !status.is_success() {
            log::debug!("request failed with status {status}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}

fn shared_client() -> &'static ApiClient {
    static CLIENT: OnceLock<ApiClient> = OnceLock::new();
    CLIENT.get_or_init(ApiClient::new)
}

/// GET `url` with the process-wide shared client
pub async fn get(url: &str) -> Result<Value, ApiError> {
    shared_client().get(url).await
}

/// POST `payload` to `url` with the process-wide shared client
pub async fn post<T: Serialize + ?Sized>(url: &str, payload: &T) -> Result<Value, ApiError> {
    shared_client().post(url, payload).await
}

/// POST the empty object `{}` to `url` with the process-wide shared client
pub async fn post_empty(url: &str) -> Result<Value, ApiError> {
    shared_client().post_empty(url).await
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
