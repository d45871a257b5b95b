use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::models::ErrorBody;

/// Shown when a failure carries no usable message.
pub const UNEXPECTED_ERROR: &str = "Ocurrió un error inesperado.";

/// Default origin when no URL was configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response at all (connection refused, DNS, aborted request)
    #[error("{0}")]
    Network(String),
    /// Non-2xx response; `message` is the most specific reason found in the body
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl ApiError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// No request timeout: calls wait until the server answers.
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url: base_url.trim_end_matches('/').to_string(),
                client: Client::new(),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.inner.base_url, path);
        let response = self.inner.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = format!("{}{}", self.inner.base_url, path);
        let response = self.inner.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()));
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_default();
        tracing::debug!("Request rejected with {}: {}", status, text);

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: body.into_message(status.as_u16()),
        })
    }
}

// Dashboard data lives next to the front end; call creation may be relayed elsewhere.
static API_CLIENT: std::sync::OnceLock<ApiClient> = std::sync::OnceLock::new();
static CALL_API_CLIENT: std::sync::OnceLock<ApiClient> = std::sync::OnceLock::new();

pub fn init_api_clients(api_url: &str, call_api_url: &str) {
    let _ = API_CLIENT.set(ApiClient::new(api_url));
    let _ = CALL_API_CLIENT.set(ApiClient::new(call_api_url));
}

pub fn api_client() -> &'static ApiClient {
    API_CLIENT.get_or_init(|| ApiClient::new(DEFAULT_API_URL))
}

pub fn call_api_client() -> &'static ApiClient {
    CALL_API_CLIENT.get_or_init(|| ApiClient::new(DEFAULT_API_URL))
}
