//! recipe-proxy: HTTP proxy in front of the Gemini generateContent API
//!
//! Features:
//! - Single recipe endpoint that turns `{"cuisine": ...}` into a Gemini request
//! - Server-held API key, never exposed to clients
//! - Normalized error bodies with upstream status passthrough

pub mod api;
pub mod config;
pub mod prompt;
pub mod proxy;
pub mod upstream;

pub use config::AppConfig;
pub use proxy::{build_router, run_server, RecipeHandler};
pub use upstream::{GeminiClient, GenerativeClient};
