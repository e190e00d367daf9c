//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON envelope on every response

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod operation;
pub mod routes;
pub mod server;

pub use envelope::Envelope;
pub use error::ApiError;
pub use operation::Operation;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
