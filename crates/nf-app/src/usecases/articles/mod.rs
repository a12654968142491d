pub mod admin;
pub mod get;
pub mod push;
pub mod search;
pub mod service;

pub use admin::{ManageArticles, ManageArticlesError};
pub use get::GetArticle;
pub use push::{SendPushError, SendPushNotification};
pub use search::SearchArticles;
pub use service::{ArticleService, ArticleServiceError};
