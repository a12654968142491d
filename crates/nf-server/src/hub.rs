//! Fan-out of article events to connected WebSocket clients.

use nf_core::ports::ArticleEventPublisherPort;
use nf_core::realtime::ServerEvent;
use tokio::sync::broadcast;
use tracing::{debug, error};

const HUB_CAPACITY: usize = 256;

/// Frames are serialized once on publish and shared by every subscriber.
#[derive(Debug, Clone)]
pub struct EventHub {
    tx: broadcast::Sender<String>,
}

impl EventHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(HUB_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleEventPublisherPort for EventHub {
    fn publish(&self, event: ServerEvent) -> usize {
        let frame = match event.to_frame() {
            Ok(frame) => frame,
            Err(err) => {
                error!(error = %err, "Failed to encode realtime event");
                return 0;
            }
        };
        // No subscribers is not an error.
        let reached = self.tx.send(frame).unwrap_or(0);
        debug!(reached, "Published realtime event");
        reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_reaches_every_subscriber() {
        let hub = EventHub::new();
        let mut a = hub.subscribe();
        let mut b = hub.subscribe();

        let reached = hub.publish(ServerEvent::ArticleDeleted("x".into()));

        assert_eq!(reached, 2);
        let expected = r#"{"event":"articleDeleted","data":"x"}"#;
        assert_eq!(a.recv().await.unwrap(), expected);
        assert_eq!(b.recv().await.unwrap(), expected);
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let hub = EventHub::new();

        assert_eq!(hub.publish(ServerEvent::ArticleDeleted("x".into())), 0);
        assert_eq!(hub.subscriber_count(), 0);
    }
}
