//! NewsFeed article service: REST API, push relay and the `/ws` event
//! channel, served with axum.

pub mod error;
pub mod hub;
pub mod routes;

use std::future::Future;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

pub use error::ServiceError;
pub use hub::EventHub;
pub use routes::{build_router, AppState};

/// Serve until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!(%addr, "Article service listening");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Article service stopped unexpectedly")?;
    info!("Article service stopped");
    Ok(())
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    serve_with_shutdown(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}
