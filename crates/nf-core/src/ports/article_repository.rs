use async_trait::async_trait;

use crate::article::ArticleRecord;
use crate::ids::ArticleId;
use crate::ports::errors::ArticleRepositoryError;

#[async_trait]
pub trait ArticleRepositoryPort: Send + Sync {
    /// All articles ordered by `uploaded_at`, newest first.
    async fn list(&self) -> Result<Vec<ArticleRecord>, ArticleRepositoryError>;

    /// Case-insensitive substring match over heading or text, in insertion
    /// order.
    async fn search(&self, term: &str) -> Result<Vec<ArticleRecord>, ArticleRepositoryError>;

    async fn find_by_id(
        &self,
        id: &ArticleId,
    ) -> Result<Option<ArticleRecord>, ArticleRepositoryError>;

    /// Insert, or replace the content of an existing row with the same id.
    async fn insert(&self, record: ArticleRecord) -> Result<ArticleRecord, ArticleRepositoryError>;

    /// Replace media, heading, text and timestamp; likes are kept.
    async fn update(&self, record: ArticleRecord) -> Result<ArticleRecord, ArticleRepositoryError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: &ArticleId) -> Result<bool, ArticleRepositoryError>;
}
