//! # nf-core
//!
//! Core domain models and business logic for NewsFeed.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod article;
pub mod bookmarks;
pub mod config;
pub mod feed;
pub mod ids;
pub mod notification;
pub mod ports;
pub mod realtime;
pub mod theme;
pub mod time_format;

// Re-export commonly used types at the crate root
pub use article::{Article, ArticleDraft, ArticlePayload, ArticleRecord, MediaRef};
pub use bookmarks::{BookmarkChange, BookmarkNotice, BookmarkSet, NoticeKind};
pub use config::AppConfig;
pub use feed::{FeedEvent, FeedState, FeedStatus};
pub use ids::ArticleId;
pub use notification::{ArticleNotification, TapTarget};
pub use realtime::ServerEvent;
pub use theme::Theme;
