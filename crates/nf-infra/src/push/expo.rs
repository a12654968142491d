//! Expo push service client.

use async_trait::async_trait;
use nf_core::notification::PushMessage;
use nf_core::ports::{PushError, PushSenderPort};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

pub struct ExpoPushSender {
    client: Client,
    endpoint: String,
}

impl ExpoPushSender {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PushSenderPort for ExpoPushSender {
    async fn send(&self, message: &PushMessage) -> Result<Value, PushError> {
        debug!(endpoint = %self.endpoint, "Forwarding push message");
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(message)
            .send()
            .await
            .map_err(|e| PushError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PushError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Push service rejected message");
            return Err(PushError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        // Expo answers with JSON; keep a non-JSON body as a plain string.
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}
