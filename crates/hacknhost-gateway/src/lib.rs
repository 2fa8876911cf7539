//! # HacknHost Gateway
//!
//! Axum HTTP layer around the chat matcher.
//!
//! ```text
//! POST /api/chat       {"message": "..."} → {"response": "..."}
//! GET  /api/chat/info  knowledge base stats
//! GET  /health         liveness
//! ```

pub mod routes;
pub mod server;

pub use routes::ChatReply;
pub use server::{AppState, build_router, start};
