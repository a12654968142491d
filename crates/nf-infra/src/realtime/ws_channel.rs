//! WebSocket connection to the article service's event channel.

use async_trait::async_trait;
use futures_util::StreamExt;
use nf_core::config::ReconnectConfig;
use nf_core::ports::{FrameReceiver, RealtimeChannelPort, RealtimeError};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, info_span, warn, Instrument};

use super::backoff::Backoff;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

const FRAME_BUFFER: usize = 64;

pub struct WsRealtimeChannel {
    url: String,
    reconnect: ReconnectConfig,
}

enum PumpEnd {
    ReceiverGone,
    ConnectionLost,
}

impl WsRealtimeChannel {
    pub fn new(url: impl Into<String>, reconnect: ReconnectConfig) -> Self {
        Self {
            url: url.into(),
            reconnect,
        }
    }

    /// Derive the channel endpoint from the REST base url
    /// (`http://host:3000` becomes `ws://host:3000/ws`).
    pub fn from_backend_url(backend_url: &str, reconnect: ReconnectConfig) -> Self {
        Self::new(ws_endpoint(backend_url), reconnect)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn ws_endpoint(backend_url: &str) -> String {
    let base = backend_url.trim_end_matches('/');
    let base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_string()
    };
    format!("{base}/ws")
}

#[async_trait]
impl RealtimeChannelPort for WsRealtimeChannel {
    async fn connect(&self) -> Result<FrameReceiver, RealtimeError> {
        let (stream, _) = connect_async(self.url.as_str())
            .await
            .map_err(|e| RealtimeError::Connect(e.to_string()))?;
        info!(url = %self.url, "Realtime channel connected");

        let (tx, rx) = mpsc::channel(FRAME_BUFFER);
        let span = info_span!("infra.realtime.pump", url = %self.url);
        tokio::spawn(pump(self.url.clone(), self.reconnect, stream, tx).instrument(span));
        Ok(rx)
    }
}

/// Forward text frames until the receiver is dropped or the connection is
/// gone for good.
async fn pump(url: String, reconnect: ReconnectConfig, first: WsStream, tx: mpsc::Sender<String>) {
    let mut backoff = Backoff::new(reconnect);
    let mut stream = first;

    loop {
        match forward(&mut stream, &tx).await {
            PumpEnd::ReceiverGone => {
                debug!("Frame receiver dropped, closing connection");
                let _ = stream.close(None).await;
                return;
            }
            PumpEnd::ConnectionLost => {}
        }

        stream = loop {
            let Some(delay) = backoff.next_delay() else {
                info!(attempts = backoff.attempt(), "Realtime channel closed, not reconnecting");
                return;
            };
            tokio::select! {
                _ = tx.closed() => return,
                _ = tokio::time::sleep(delay) => {}
            }
            match connect_async(url.as_str()).await {
                Ok((stream, _)) => {
                    info!(attempt = backoff.attempt(), "Realtime channel reconnected");
                    backoff.reset();
                    break stream;
                }
                Err(err) => {
                    warn!(attempt = backoff.attempt(), error = %err, "Realtime reconnect failed");
                }
            }
        };
    }
}

async fn forward(stream: &mut WsStream, tx: &mpsc::Sender<String>) -> PumpEnd {
    loop {
        tokio::select! {
            _ = tx.closed() => return PumpEnd::ReceiverGone,
            message = stream.next() => match message {
                Some(Ok(Message::Text(text))) => {
                    if tx.send(text).await.is_err() {
                        return PumpEnd::ReceiverGone;
                    }
                }
                Some(Ok(Message::Close(frame))) => {
                    debug!(?frame, "Server closed realtime channel");
                    return PumpEnd::ConnectionLost;
                }
                // Control and binary frames carry no events.
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    warn!(error = %err, "Realtime channel read failed");
                    return PumpEnd::ConnectionLost;
                }
                None => return PumpEnd::ConnectionLost,
            }
        }
    }
}
