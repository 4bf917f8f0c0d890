//! reqwest-backed Gemini client

use async_trait::async_trait;
use axum::http::header;
use std::time::Duration;
use url::Url;

use super::client::{GenerativeClient, UpstreamError, UpstreamResponse};
use crate::api::GenerateContentRequest;
use crate::config::{ApiKey, UpstreamConfig};

/// Gemini generateContent client with its own connection pool
#[derive(Debug, Clone)]
pub struct GeminiClient {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl GeminiClient {
    /// Construct a client from upstream configuration
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let endpoint = Url::parse(&config.endpoint())?;
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            endpoint,
            http_client,
        })
    }

    /// Endpoint without credentials
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Endpoint with the key appended as a query parameter
    fn keyed_url(&self, api_key: &ApiKey) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", api_key.expose());
        url
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(
        &self,
        api_key: &ApiKey,
        payload: &GenerateContentRequest,
    ) -> Result<UpstreamResponse, UpstreamError> {
        tracing::debug!(endpoint = %self.endpoint, "Sending generateContent request");

        // The keyed URL must not end up in logs, so strip it from errors
        let response = self
            .http_client
            .post(self.keyed_url(api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        tracing::debug!(
            status = %status,
            body_size = body.len(),
            "Received response from upstream"
        );

        Ok(UpstreamResponse { status, body })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
