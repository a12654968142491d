//! Realtime channel wire contract.
//!
//! Every server → client message is one JSON text frame
//! `{"event": <name>, "data": <payload>}`. Client and server share the event
//! names below; anything else is ignored by clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::article::{Article, ArticlePayload, PayloadError};
use crate::feed::FeedEvent;
use crate::ids::ArticleId;

pub const EVENT_CONNECTED: &str = "connected";
pub const EVENT_ARTICLE_CREATED: &str = "articleCreated";
pub const EVENT_ARTICLE_UPDATED: &str = "articleUpdated";
pub const EVENT_ARTICLE_DELETED: &str = "articleDeleted";

/// Events emitted by the article service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    #[serde(rename = "connected")]
    Connected { message: String },
    #[serde(rename = "articleCreated")]
    ArticleCreated(ArticlePayload),
    #[serde(rename = "articleUpdated")]
    ArticleUpdated(ArticlePayload),
    #[serde(rename = "articleDeleted")]
    ArticleDeleted(String),
}

impl ServerEvent {
    pub fn greeting() -> Self {
        ServerEvent::Connected {
            message: "Connected successfully".to_string(),
        }
    }

    pub fn to_frame(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame is not a JSON event envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("`{event}` payload is malformed: {source}")]
    Payload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{event}` payload rejected: {source}")]
    Invalid {
        event: &'static str,
        #[source]
        source: PayloadError,
    },
}

#[derive(Debug, Deserialize)]
struct RawFrame {
    event: String,
    #[serde(default)]
    data: Value,
}

/// Decode one text frame into a feed delta.
///
/// `Ok(None)` means the frame is well-formed but carries nothing the feed
/// reacts to (the greeting or an event name outside the contract).
pub fn decode_frame(text: &str) -> Result<Option<FeedEvent>, FrameError> {
    let raw: RawFrame = serde_json::from_str(text).map_err(FrameError::Envelope)?;

    let event = match raw.event.as_str() {
        EVENT_ARTICLE_CREATED => {
            FeedEvent::Created(decode_article(EVENT_ARTICLE_CREATED, raw.data)?)
        }
        EVENT_ARTICLE_UPDATED => {
            FeedEvent::Updated(decode_article(EVENT_ARTICLE_UPDATED, raw.data)?)
        }
        EVENT_ARTICLE_DELETED => {
            let id: String =
                serde_json::from_value(raw.data).map_err(|source| FrameError::Payload {
                    event: EVENT_ARTICLE_DELETED,
                    source,
                })?;
            let id = ArticleId::from(id);
            if id.is_blank() {
                return Err(FrameError::Invalid {
                    event: EVENT_ARTICLE_DELETED,
                    source: PayloadError::MissingId,
                });
            }
            FeedEvent::Deleted(id)
        }
        _ => return Ok(None),
    };

    Ok(Some(event))
}

fn decode_article(event: &'static str, data: Value) -> Result<Article, FrameError> {
    let payload: ArticlePayload =
        serde_json::from_value(data).map_err(|source| FrameError::Payload { event, source })?;
    Article::try_from(payload).map_err(|source| FrameError::Invalid { event, source })
}
