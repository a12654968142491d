//! Use cases
//!
//! Client side:
//!   BookmarkManager, ThemePreferences   local state + durable store
//!   FeedController ← RealtimeSyncClient  fetched list + realtime deltas
//!   SearchArticles, GetArticle, ManageArticles  one-shot API calls
//!
//! Server side:
//!   ArticleService       CRUD over the repository, publishes events
//!   SendPushNotification push relay

pub mod articles;
pub mod bookmarks;
pub mod feed;
pub mod realtime;
pub mod theme;

pub use articles::{
    ArticleService, ArticleServiceError, GetArticle, ManageArticles, ManageArticlesError,
    SearchArticles, SendPushError, SendPushNotification,
};
pub use bookmarks::{BookmarkManager, ToggleOutcome};
pub use feed::FeedController;
pub use realtime::{FeedSubscription, RealtimeSyncClient};
pub use theme::ThemePreferences;
