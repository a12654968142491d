use async_trait::async_trait;
use nf_core::notification::ArticleNotification;
use nf_core::ports::{NotificationError, NotificationPort};
use tracing::info;

/// Prints notifications to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

#[async_trait]
impl NotificationPort for ConsoleNotifier {
    async fn notify(&self, notification: &ArticleNotification) -> Result<(), NotificationError> {
        info!(article_id = %notification.article_id, "Article notification");
        println!(
            "\n[new] {}\n      {}\n      open: newsfeed feed open {}",
            notification.title, notification.body, notification.article_id
        );
        Ok(())
    }
}
