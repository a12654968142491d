use async_trait::async_trait;
use nf_core::article::Article;
use nf_core::ports::{BookmarkStoreError, BookmarkStorePort};

use super::kv_store::{FileKvStore, KvError};

pub const BOOKMARKS_KEY: &str = "@bookmarks";

/// Bookmarks as a JSON array of client-shaped articles.
#[derive(Debug, Clone)]
pub struct FileBookmarkStore {
    kv: FileKvStore,
}

impl FileBookmarkStore {
    pub fn new(kv: FileKvStore) -> Self {
        Self { kv }
    }
}

impl From<KvError> for BookmarkStoreError {
    fn from(err: KvError) -> Self {
        match err {
            KvError::Io { .. } => BookmarkStoreError::Unavailable(err.to_string()),
            KvError::Serde { .. } => BookmarkStoreError::Serialization(err.to_string()),
        }
    }
}

#[async_trait]
impl BookmarkStorePort for FileBookmarkStore {
    async fn load(&self) -> Result<Option<Vec<Article>>, BookmarkStoreError> {
        Ok(self.kv.get(BOOKMARKS_KEY).await?)
    }

    async fn save(&self, bookmarks: &[Article]) -> Result<(), BookmarkStoreError> {
        Ok(self.kv.set(BOOKMARKS_KEY, bookmarks).await?)
    }
}
