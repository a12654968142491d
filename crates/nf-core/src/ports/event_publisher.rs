use crate::realtime::ServerEvent;

/// Fan-out of article events to realtime subscribers.
pub trait ArticleEventPublisherPort: Send + Sync {
    /// Returns the number of subscribers the event reached.
    fn publish(&self, event: ServerEvent) -> usize;
}
