//! HTTP server hosting the recipe handler

use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    routing::{any, get},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handler::RecipeHandler;
use crate::config::AppConfig;
use crate::upstream::GeminiClient;

/// Build the router around a handler
pub fn build_router(handler: RecipeHandler) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Recipe endpoint, at the root and at the path the browser front end calls
        .route("/", any(recipe_handler))
        .route("/api/generate", any(recipe_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(handler)
}

/// Run the proxy server
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let client = GeminiClient::from_config(&config.upstream)?;

    let api_key = config.upstream.resolve_api_key();
    if api_key.is_none() {
        // Not fatal: each recipe request will answer 500 until the key is provided
        tracing::error!(
            env = %config.upstream.api_key_env,
            "Upstream API key environment variable is not set"
        );
    }

    let handler = RecipeHandler::new(api_key, Arc::new(client.clone()));
    let app = build_router(handler);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("recipe-proxy listening on {}", addr);
    tracing::info!("Proxying to {}", client.endpoint());

    axum::serve(listener, app).await?;
    Ok(())
}

/// Health check endpoint
async fn health_handler() -> &'static str {
    "OK"
}

async fn recipe_handler(
    State(handler): State<RecipeHandler>,
    method: Method,
    body: Bytes,
) -> axum::response::Response {
    handler.handle(&method, &body).await
}
