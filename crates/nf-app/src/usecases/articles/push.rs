//! Push relay: validate a request and forward it to the push service.

use std::sync::Arc;

use nf_core::notification::{PushMessage, PushRequest, PushValidationError};
use nf_core::ports::{PushError, PushSenderPort};
use serde_json::Value;
use tracing::{info, info_span, warn, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum SendPushError {
    #[error(transparent)]
    Invalid(#[from] PushValidationError),

    #[error(transparent)]
    Delivery(#[from] PushError),
}

pub struct SendPushNotification {
    sender: Arc<dyn PushSenderPort>,
}

impl SendPushNotification {
    pub fn new(sender: Arc<dyn PushSenderPort>) -> Self {
        Self { sender }
    }

    /// Returns the push service's response body.
    pub async fn execute(&self, request: PushRequest) -> Result<Value, SendPushError> {
        let span = info_span!("usecase.push.send");
        async {
            request.validate()?;
            let message = PushMessage::from(request);
            match self.sender.send(&message).await {
                Ok(body) => {
                    info!("Push notification relayed");
                    Ok(body)
                }
                Err(err) => {
                    warn!(error = %err, "Push notification relay failed");
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}
