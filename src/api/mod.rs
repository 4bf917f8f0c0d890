//! Wire types for the inbound recipe API and the Gemini upstream

mod gemini;
mod recipe;

pub use gemini::*;
pub use recipe::*;
