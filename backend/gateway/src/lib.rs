//! Stridesplit Gateway HTTP API Server
//!
//! Exposes the analyze endpoint, a health probe, and permissive CORS for
//! browser clients.

pub mod analyze_api;
pub mod error;
pub mod health_api;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server, AppState};
