//! HTTP client for the forms API
//!
//! A stateless wrapper issuing one HTTP call per endpoint and handing the raw
//! response back to the caller. No retries, no caching, no batching.

use anyhow::Result;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Thin client for the forms API
pub struct FormsClient {
    base_url: String,
    client: Client,
}

impl FormsClient {
    /// Create a client against a server base URL, e.g. `http://localhost:3000`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// GET /api/forms
    pub async fn list_forms(&self) -> Result<Response> {
        Ok(self.client.get(self.url("/forms")).send().await?)
    }

    /// POST /api/forms
    pub async fn create_form(&self, form: &Value) -> Result<Response> {
        Ok(self
            .client
            .post(self.url("/forms"))
            .json(form)
            .send()
            .await?)
    }

    /// GET /api/forms/{id}
    pub async fn get_form(&self, id: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(&format!("/forms/{}", id)))
            .send()
            .await?)
    }

    /// PUT /api/forms/{id}
    pub async fn update_form(&self, id: &str, form: &Value) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(&format!("/forms/{}", id)))
            .json(form)
            .send()
            .await?)
    }

    /// DELETE /api/forms/{id}
    pub async fn delete_form(&self, id: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(&format!("/forms/{}", id)))
            .send()
            .await?)
    }

    /// POST /api/forms/{id}/submit
    pub async fn submit_response(&self, form_id: &str, data: &Value) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(&format!("/forms/{}/submit", form_id)))
            .json(data)
            .send()
            .await?)
    }

    /// GET /api/forms/{id}/responses
    pub async fn list_responses(&self, form_id: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(&format!("/forms/{}/responses", form_id)))
            .send()
            .await?)
    }
}
