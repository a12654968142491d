use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const EXPO_TOKEN_PREFIX: &str = "ExponentPushToken[";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PushValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid Expo push token format")]
    InvalidToken,
}

/// Body of the push relay endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl PushRequest {
    pub fn validate(&self) -> Result<(), PushValidationError> {
        if self.token.is_empty() || self.title.is_empty() || self.body.is_empty() {
            return Err(PushValidationError::MissingFields);
        }
        if !self.token.starts_with(EXPO_TOKEN_PREFIX) {
            return Err(PushValidationError::InvalidToken);
        }
        Ok(())
    }
}

/// Message accepted by the Expo push API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessage {
    pub to: String,
    pub sound: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub priority: String,
    pub channel_id: String,
}

impl From<PushRequest> for PushMessage {
    fn from(request: PushRequest) -> Self {
        Self {
            to: request.token,
            sound: "default".to_string(),
            title: request.title,
            body: request.body,
            data: request.data,
            priority: "high".to_string(),
            channel_id: "default".to_string(),
        }
    }
}
