//! Handler failures and their client-facing responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::ErrorBody;

/// Every way a recipe request can fail. The client only ever sees
/// `client_message`; detail stays in the server logs.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("request has no usable cuisine")]
    MissingCuisine,

    #[error("upstream API key is not configured")]
    MissingCredential,

    #[error("upstream returned {status}")]
    Upstream { status: StatusCode },

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            HandlerError::MissingCuisine => StatusCode::BAD_REQUEST,
            HandlerError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            HandlerError::Upstream { status } => *status,
            HandlerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn client_message(&self) -> &'static str {
        match self {
            HandlerError::MethodNotAllowed(_) => "Method Not Allowed",
            HandlerError::MissingCuisine => "Missing cuisine parameter.",
            HandlerError::MissingCredential => "Server configuration error.",
            HandlerError::Upstream { .. } => "Failed to fetch recipe from Gemini API.",
            HandlerError::Internal(_) => "Internal server error during recipe generation.",
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: HandlerError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_error_responses() {
        let cases = [
            (
                HandlerError::MethodNotAllowed("GET".to_string()),
                StatusCode::METHOD_NOT_ALLOWED,
                r#"{"error":"Method Not Allowed"}"#,
            ),
            (
                HandlerError::MissingCuisine,
                StatusCode::BAD_REQUEST,
                r#"{"error":"Missing cuisine parameter."}"#,
            ),
            (
                HandlerError::MissingCredential,
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"Server configuration error."}"#,
            ),
            (
                HandlerError::Upstream {
                    status: StatusCode::TOO_MANY_REQUESTS,
                },
                StatusCode::TOO_MANY_REQUESTS,
                r#"{"error":"Failed to fetch recipe from Gemini API."}"#,
            ),
            (
                HandlerError::Internal("connection refused".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"Internal server error during recipe generation."}"#,
            ),
        ];

        for (err, expected_status, expected_body) in cases {
            let (status, body) = render(err).await;
            assert_eq!(status, expected_status);
            assert_eq!(body, expected_body);
        }
    }

    #[tokio::test]
    async fn test_internal_detail_not_exposed() {
        let (_, body) = render(HandlerError::Internal("secret stack trace".to_string())).await;
        assert!(!body.contains("secret"));
    }
}
