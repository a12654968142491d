use async_trait::async_trait;
use serde_json::Value;

use crate::article::{Article, ArticleDraft};
use crate::ids::ArticleId;
use crate::notification::PushRequest;
use crate::ports::errors::ArticleApiError;

/// Client view of the article service REST API.
#[async_trait]
pub trait ArticleApiPort: Send + Sync {
    /// Full list, newest first.
    async fn fetch_all(&self) -> Result<Vec<Article>, ArticleApiError>;

    async fn search(&self, query: &str) -> Result<Vec<Article>, ArticleApiError>;

    async fn get(&self, id: &ArticleId) -> Result<Article, ArticleApiError>;

    async fn create(&self, draft: &ArticleDraft) -> Result<Article, ArticleApiError>;

    async fn update(&self, id: &ArticleId, draft: &ArticleDraft)
        -> Result<Article, ArticleApiError>;

    async fn delete(&self, id: &ArticleId) -> Result<(), ArticleApiError>;

    /// Ask the backend to relay a push notification; returns the relay's
    /// `data` field.
    async fn send_notification(&self, request: &PushRequest) -> Result<Value, ArticleApiError>;
}
