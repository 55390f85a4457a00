//! Todo Gateway
//!
//! A non-blocking HTTP gateway built with Tokio and Axum. Each inbound
//! request maps onto exactly one typed call against the downstream Todo
//! API; results stream back through the response without blocking a
//! serving thread.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                 TODO GATEWAY                   │
//!                    │                                                │
//!   Client Request   │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│ service │───▶│ upstream │──┼──▶ Downstream
//!                    │  │ router  │    │(delegate)│   │  client  │  │    Todo API
//!                    │  └─────────┘    └─────────┘    └──────────┘  │
//!   Client Response  │                                               │
//!   ◀────────────────┼── streamed JSON array / single Todo / error ──┤
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │           Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐ │ │
//!                    │  │  │ config │ │observability│ │lifecycle │ │ │
//!                    │  │  └────────┘ └─────────────┘ └──────────┘ │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use todo_gateway::config::loader::load_config;
use todo_gateway::observability::{logging, metrics};
use todo_gateway::{GatewayConfig, HttpServer, Shutdown, TodoClient, TodoService};

#[derive(Parser)]
#[command(name = "todo-gateway")]
#[command(about = "HTTP gateway over the downstream Todo API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    // Initialize tracing subscriber
    logging::init(&config.observability);

    tracing::info!("todo-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_url = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Construct the downstream client and service, leaf first
    let client = TodoClient::new(&config.upstream, &config.timeouts)?;
    let service = TodoService::new(Arc::new(client));

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, service);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
