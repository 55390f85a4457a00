//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the route table (fixed at startup, immutable afterwards)
//! - Wire up middleware (access log, timeout, tracing)
//! - Serve connections with graceful shutdown
//!
//! # Design Decisions
//! - The route table and application state are shared read-only across
//!   concurrent requests; nothing above the transport needs a lock
//! - A caller disconnect drops the handler future, which cancels the
//!   in-flight upstream call and any partially-streamed response

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::observability::access_log;
use crate::service::TodoService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
}

/// HTTP server for the todo gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and service.
    pub fn new(config: GatewayConfig, service: TodoService) -> Self {
        let state = AppState { service };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all routes and middleware layers.
    ///
    /// `/todos/all` is a literal route and takes precedence over the
    /// `/todos/{id}` variable segment, so the three patterns never overlap.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/todos/all", get(handlers::all_todos))
            .route("/todos/{id}", get(handlers::todo_by_id))
            .route("/todos", get(handlers::todos_by_user))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            // Outside the timeout, so timed-out requests are still logged.
            .layer(middleware::from_fn(access_log::record))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until Ctrl+C or a coordinated shutdown arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    result = tokio::signal::ctrl_c() => {
                        if let Err(e) = result {
                            tracing::error!(error = %e, "failed to listen for Ctrl+C");
                        }
                        tracing::info!("shutdown signal received");
                    }
                    _ = shutdown.recv() => {
                        tracing::info!("shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
