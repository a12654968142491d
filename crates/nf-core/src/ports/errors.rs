use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookmarkStoreError {
    #[error("bookmark storage unavailable: {0}")]
    Unavailable(String),

    #[error("bookmark serialization failed: {0}")]
    Serialization(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeStoreError {
    #[error("theme storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored theme is unreadable: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArticleApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },

    #[error("article not found")]
    NotFound,

    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RealtimeError {
    #[error("realtime connect failed: {0}")]
    Connect(String),

    #[error("realtime channel closed")]
    Closed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification facility unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArticleRepositoryError {
    #[error("article not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PushError {
    #[error("push request failed: {0}")]
    Transport(String),

    #[error("push service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}
