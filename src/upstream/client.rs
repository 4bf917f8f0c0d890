//! Generative client trait

use async_trait::async_trait;
use axum::http::StatusCode;
use bytes::Bytes;

use crate::api::GenerateContentRequest;
use crate::config::ApiKey;

/// Raw upstream reply. The body is kept as bytes so it can be relayed unchanged.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Trait for clients that can send a generateContent request
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send one request. `Err` means no HTTP response was obtained;
    /// any status code, success or not, comes back as `Ok`.
    async fn generate(
        &self,
        api_key: &ApiKey,
        payload: &GenerateContentRequest,
    ) -> Result<UpstreamResponse, UpstreamError>;

    /// Name of the client (for logging)
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
