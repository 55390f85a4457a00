//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → server.rs (route table match, middleware)
//!     → handlers.rs (parse params, invoke service operation)
//!     → response.rs (stream result as JSON) / error.rs (map failure)
//!     → Send to client, then the access log records the outcome
//! ```

pub mod error;
pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
