use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::ports::errors::RealtimeError;

/// Text frames in arrival order. The sender side is dropped when the
/// connection is gone for good.
pub type FrameReceiver = mpsc::Receiver<String>;

/// Connection provider for the server's event channel.
#[async_trait]
pub trait RealtimeChannelPort: Send + Sync {
    async fn connect(&self) -> Result<FrameReceiver, RealtimeError>;
}
