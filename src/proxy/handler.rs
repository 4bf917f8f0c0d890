//! Recipe request handler

use axum::{
    body::Body,
    http::{header, Method, Response as HttpResponse, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use super::error::HandlerError;
use crate::api::RecipeRequest;
use crate::config::ApiKey;
use crate::prompt::build_payload;
use crate::upstream::GenerativeClient;

/// Turns one `{"cuisine": ...}` request into one upstream call.
///
/// Holds no per-request state; clones share the client.
#[derive(Clone)]
pub struct RecipeHandler {
    api_key: Option<ApiKey>,
    client: Arc<dyn GenerativeClient>,
}

impl RecipeHandler {
    pub fn new(api_key: Option<ApiKey>, client: Arc<dyn GenerativeClient>) -> Self {
        Self { api_key, client }
    }

    /// Returns true if an API key was configured at startup
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Handle an incoming request
    pub async fn handle(&self, method: &Method, body: &[u8]) -> Response {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("recipe", %request_id);

        async move {
            let start = Instant::now();
            match self.process(method, body).await {
                Ok(response) => {
                    tracing::info!(
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "Recipe generated"
                    );
                    response
                }
                Err(e) => {
                    tracing::debug!(
                        status = %e.status(),
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "Recipe request failed"
                    );
                    e.into_response()
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn process(&self, method: &Method, body: &[u8]) -> Result<Response, HandlerError> {
        if *method != Method::POST {
            tracing::warn!(method = %method, "Rejected non-POST request");
            return Err(HandlerError::MethodNotAllowed(method.to_string()));
        }

        let request = RecipeRequest::from_body(body);
        let cuisine = match request.cuisine() {
            Some(cuisine) => cuisine,
            None => {
                tracing::warn!(body_size = body.len(), "Request has no cuisine");
                return Err(HandlerError::MissingCuisine);
            }
        };

        let api_key = match self.api_key.as_ref() {
            Some(key) => key,
            None => {
                tracing::error!("Upstream API key is not set; check the configured environment variable");
                return Err(HandlerError::MissingCredential);
            }
        };

        tracing::info!(cuisine = %cuisine, "→ recipe request");

        let payload = build_payload(cuisine);

        let upstream = match self.client.generate(api_key, &payload).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(client = self.client.name(), error = %e, "Upstream call failed");
                return Err(HandlerError::Internal(e.to_string()));
            }
        };

        // The body must be JSON before the status is looked at; a non-JSON
        // body is an internal error whatever the status
        if let Err(e) = serde_json::from_slice::<serde_json::Value>(&upstream.body) {
            tracing::error!(
                status = %upstream.status,
                error = %e,
                body_preview = %String::from_utf8_lossy(&upstream.body[..upstream.body.len().min(500)]),
                "Upstream response is not valid JSON"
            );
            return Err(HandlerError::Internal(e.to_string()));
        }

        if !upstream.status.is_success() {
            tracing::error!(
                status = %upstream.status,
                error_body = %String::from_utf8_lossy(&upstream.body),
                "Upstream returned error response"
            );
            return Err(HandlerError::Upstream {
                status: upstream.status,
            });
        }

        HttpResponse::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(upstream.body))
            .map_err(|e| HandlerError::Internal(e.to_string()))
    }
}
