//! Todo Gateway Library
//!
//! A non-blocking HTTP gateway that serves a small REST surface by
//! invoking a downstream Todo API and streaming the results back to the
//! caller.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod service;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::TodoService;
pub use upstream::{Todo, TodoClient};
