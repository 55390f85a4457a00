//! Downstream Todo API subsystem.
//!
//! # Data Flow
//! ```text
//! service call
//!     → client.rs (build URL, issue GET, enforce status)
//!     → types.rs (decode into Todo records, classify failures)
//!     → Result<Todo | TodoStream, UpstreamError> back to the caller
//! ```
//!
//! # Design Decisions
//! - One outbound HTTP call per operation; no retries, no caching
//! - Errors carry enough context for the HTTP boundary to pick a status
//! - The trait seam exists so tests can swap the transport for a double

pub mod client;
pub mod types;

pub use client::{TodoApi, TodoClient};
pub use types::{Todo, TodoStream, UpstreamError, UpstreamResult};
