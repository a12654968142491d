use async_trait::async_trait;

use crate::article::Article;
use crate::ports::errors::BookmarkStoreError;

/// Durable storage for the bookmark set.
#[async_trait]
pub trait BookmarkStorePort: Send + Sync {
    /// `Ok(None)` when nothing has been persisted yet.
    async fn load(&self) -> Result<Option<Vec<Article>>, BookmarkStoreError>;

    /// Overwrite the persisted set.
    async fn save(&self, bookmarks: &[Article]) -> Result<(), BookmarkStoreError>;
}
