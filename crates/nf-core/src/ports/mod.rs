//! Port interfaces for the application layer.
//!
//! Client-side ports (local stores, backend API, realtime channel,
//! notifications) are implemented in `nf-infra`; server-side ports
//! (article repository, event publisher, push sender) back the article
//! service in `nf-app`.

mod article_api;
mod article_repository;
mod bookmark_store;
mod clock;
pub mod errors;
mod event_publisher;
mod notification;
mod push_sender;
mod realtime;
mod theme_store;

pub use article_api::ArticleApiPort;
pub use article_repository::ArticleRepositoryPort;
pub use bookmark_store::BookmarkStorePort;
pub use clock::ClockPort;
pub use errors::{
    ArticleApiError, ArticleRepositoryError, BookmarkStoreError, NotificationError, PushError,
    RealtimeError, ThemeStoreError,
};
pub use event_publisher::ArticleEventPublisherPort;
pub use notification::NotificationPort;
pub use push_sender::PushSenderPort;
pub use realtime::{FrameReceiver, RealtimeChannelPort};
pub use theme_store::ThemeStorePort;
