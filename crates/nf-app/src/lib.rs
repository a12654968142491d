//! NewsFeed application layer
//!
//! Client state objects (bookmarks, feed, theme), realtime sync and the
//! server-side article service, all written against `nf-core` ports.

pub mod usecases;

pub use usecases::{
    ArticleService, ArticleServiceError, BookmarkManager, FeedController, FeedSubscription,
    GetArticle, ManageArticles, ManageArticlesError, RealtimeSyncClient, SearchArticles,
    SendPushNotification, SendPushError, ThemePreferences, ToggleOutcome,
};
