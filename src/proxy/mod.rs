//! HTTP proxy server

mod error;
mod handler;
pub mod server;

pub use error::HandlerError;
pub use handler::RecipeHandler;
pub use server::{build_router, run_server};
