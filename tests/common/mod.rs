//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::net::TcpListener;

use todo_gateway::{GatewayConfig, HttpServer, Shutdown, TodoClient, TodoService};

/// Fixture collection matching the downstream wire shape.
#[allow(dead_code)]
pub fn sample_todos() -> Vec<Value> {
    vec![
        json!({"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false}),
        json!({"userId": 1, "id": 2, "title": "quis ut nam facilis", "completed": true}),
        json!({"userId": 2, "id": 3, "title": "fugiat veniam minus", "completed": false}),
    ]
}

/// Spawn a gateway against the given upstream and return its address plus
/// the shutdown handle keeping it alive.
pub async fn spawn_gateway(upstream_url: &str) -> (SocketAddr, Shutdown) {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.base_url = upstream_url.to_string();
    config.timeouts.connect_secs = 1;
    config.timeouts.request_secs = 5;

    let client = TodoClient::new(&config.upstream, &config.timeouts).unwrap();
    let service = TodoService::new(Arc::new(client));

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(config, service);

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    (addr, shutdown)
}
