//! Outbound calls to the generative-content API

mod client;
mod gemini;

pub use client::{GenerativeClient, UpstreamError, UpstreamResponse};
pub use gemini::GeminiClient;
