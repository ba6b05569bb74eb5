//! FinSee API crate - axum HTTP server for the advisor chat proxy.
//!
//! Exposes `POST /api/chat`, which forwards financial questions to the
//! configured completion client, and a `/health` probe.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
