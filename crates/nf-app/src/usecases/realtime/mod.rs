//! Realtime sync client: one shared connection per process, fanned out to
//! every attached [`FeedController`]. Created/updated articles are
//! announced once per event through the notification port.

use std::sync::Arc;

use nf_core::feed::FeedEvent;
use nf_core::notification::ArticleNotification;
use nf_core::ports::{FrameReceiver, NotificationPort, RealtimeChannelPort, RealtimeError};
use nf_core::realtime::decode_frame;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::usecases::feed::FeedController;

const EVENT_BUFFER: usize = 256;

struct SharedConnection {
    /// Never read; kept so later feeds can `resubscribe`.
    events: broadcast::Receiver<FeedEvent>,
    pump: JoinHandle<()>,
}

pub struct RealtimeSyncClient {
    channel: Arc<dyn RealtimeChannelPort>,
    notifier: Arc<dyn NotificationPort>,
    connection: Mutex<Option<SharedConnection>>,
}

impl RealtimeSyncClient {
    pub fn new(channel: Arc<dyn RealtimeChannelPort>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            channel,
            notifier,
            connection: Mutex::new(None),
        }
    }

    /// Start applying events to `feed` in arrival order.
    ///
    /// The first attach opens the connection; later ones share it until the
    /// server closes it, after which the next attach connects again. Events
    /// stop being applied to `feed` as soon as the returned subscription is
    /// detached or dropped; the connection stays open for other feeds.
    pub async fn attach(&self, feed: Arc<FeedController>) -> Result<FeedSubscription, RealtimeError> {
        let mut events = self.events().await?;
        info!("Realtime channel attached to feed");

        let task = tokio::spawn(
            async move {
                loop {
                    match events.recv().await {
                        Ok(event) => {
                            feed.apply(event);
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "Feed fell behind the realtime channel");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
                info!("Realtime channel closed; feed will no longer update");
            }
            .instrument(info_span!("realtime.subscription")),
        );

        Ok(FeedSubscription { task: Some(task) })
    }

    async fn events(&self) -> Result<broadcast::Receiver<FeedEvent>, RealtimeError> {
        let mut shared = self.connection.lock().await;
        if let Some(conn) = shared.as_ref().filter(|c| !c.pump.is_finished()) {
            debug!("Reusing realtime connection");
            return Ok(conn.events.resubscribe());
        }

        let frames = self.channel.connect().await?;
        info!("Realtime channel connected");
        let (tx, rx) = broadcast::channel(EVENT_BUFFER);
        let pump = tokio::spawn(
            pump(frames, tx, Arc::clone(&self.notifier))
                .instrument(info_span!("realtime.connection")),
        );
        *shared = Some(SharedConnection {
            events: rx.resubscribe(),
            pump,
        });
        Ok(rx)
    }
}

impl Drop for RealtimeSyncClient {
    fn drop(&mut self) {
        if let Some(conn) = self.connection.get_mut().take() {
            conn.pump.abort();
        }
    }
}

async fn pump(
    mut frames: FrameReceiver,
    events: broadcast::Sender<FeedEvent>,
    notifier: Arc<dyn NotificationPort>,
) {
    while let Some(frame) = frames.recv().await {
        let event = match decode_frame(&frame) {
            Ok(Some(event)) => event,
            Ok(None) => {
                debug!("Ignoring realtime frame with no feed effect");
                continue;
            }
            Err(err) => {
                warn!(error = %err, "Dropping malformed realtime frame");
                continue;
            }
        };

        debug!(event = event.name(), article_id = %event.article_id(), "Relaying realtime event");
        let notification = event.notifiable().map(ArticleNotification::for_article);
        // The retained receiver keeps this from failing.
        let _ = events.send(event);

        if let Some(notification) = notification {
            if let Err(err) = notifier.notify(&notification).await {
                warn!(error = %err, article_id = %notification.article_id, "Notification dispatch failed");
            }
        }
    }
    info!("Realtime connection closed");
}

/// Handle to one feed's relay. Dropping it stops the relay.
#[derive(Debug)]
pub struct FeedSubscription {
    task: Option<JoinHandle<()>>,
}

impl FeedSubscription {
    /// Stop applying events. Anything still queued is discarded.
    pub fn detach(self) {}

    /// Wait until the connection closes on its own. Returns at once when it
    /// already has.
    pub async fn closed(&mut self) {
        if let Some(task) = self.task.as_mut() {
            let _ = task.await;
            self.task = None;
        }
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
