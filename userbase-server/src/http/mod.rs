//! HTTP server layer
//!
//! Axum server with:
//! - Explicit routing table for the users resource
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
