use async_trait::async_trait;

use crate::notification::ArticleNotification;
use crate::ports::errors::NotificationError;

/// Platform notification facility. One-way: nothing flows back into the
/// feed or bookmarks.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify(&self, notification: &ArticleNotification) -> Result<(), NotificationError>;
}
