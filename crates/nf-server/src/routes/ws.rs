//! `/ws`: greeting, then every published article event.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use nf_core::realtime::ServerEvent;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};

use super::AppState;

pub async fn upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    // Subscribed before the upgrade response goes out.
    let events = state.hub.subscribe();
    ws.on_upgrade(move |socket| session(socket, events))
}

async fn session(mut socket: WebSocket, mut events: broadcast::Receiver<String>) {
    info!("Realtime client connected");

    match ServerEvent::greeting().to_frame() {
        Ok(greeting) => {
            if socket.send(Message::Text(greeting.into())).await.is_err() {
                return;
            }
        }
        Err(err) => warn!(error = %err, "Failed to encode greeting"),
    }

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(frame) => {
                    if socket.send(Message::Text(frame.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Realtime client lagging, events dropped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                // Client frames carry nothing the server acts on.
                Some(Ok(_)) => debug!("Ignoring client frame"),
            },
        }
    }

    info!("Realtime client disconnected");
}
