use anyhow::Context;
use nf_core::config::AppConfig;
use tokio::net::TcpListener;

use crate::bootstrap::wire_server;

pub async fn run(config: &AppConfig, listen: Option<&str>) -> anyhow::Result<()> {
    let state = wire_server(config)?;
    let addr = listen.unwrap_or(&config.server.listen);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    println!("Server running on {}", listener.local_addr()?);
    nf_server::serve(listener, state).await
}
