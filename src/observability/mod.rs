//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request passes through:
//!     → access_log.rs (one structured log line + metrics per request)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; initialized once in logging.rs
//! - The access log fires after the response is materialized, on every
//!   branch, exactly once per request

pub mod access_log;
pub mod logging;
pub mod metrics;
