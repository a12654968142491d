use async_trait::async_trait;
use serde_json::Value;

use crate::notification::PushMessage;
use crate::ports::errors::PushError;

#[async_trait]
pub trait PushSenderPort: Send + Sync {
    /// Deliver one message; returns the push service's response body.
    async fn send(&self, message: &PushMessage) -> Result<Value, PushError>;
}
