//! Retell AI voice API client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CallResponse;

pub const DEFAULT_BASE_URL: &str = "https://api.retellai.com";

#[derive(Error, Debug)]
pub enum RetellError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Retell API error ({status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Clone)]
pub struct RetellClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl RetellClient {
    pub fn new(api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, RetellError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RetellError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        Ok(response.json().await?)
    }

    /// Place an outbound phone call driven by a Retell agent
    pub async fn create_phone_call(
        &self,
        request: &CreatePhoneCallRequest<'_>,
    ) -> Result<CallResponse, RetellError> {
        self.post("/v2/create-phone-call", request).await
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePhoneCallRequest<'a> {
    pub from_number: &'a str,
    pub to_number: &'a str,
    pub override_agent_id: &'a str,
    pub retell_llm_dynamic_variables: &'a serde_json::Map<String, serde_json::Value>,
}
