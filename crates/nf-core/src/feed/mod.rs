//! Feed state and the reconciliation rules applied to realtime deltas.

use tracing::debug;

use crate::article::Article;
use crate::ids::ArticleId;

/// A translated realtime delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    Created(Article),
    Updated(Article),
    Deleted(ArticleId),
}

impl FeedEvent {
    pub fn article_id(&self) -> &ArticleId {
        match self {
            FeedEvent::Created(a) | FeedEvent::Updated(a) => &a.id,
            FeedEvent::Deleted(id) => id,
        }
    }

    /// The article to announce, for events that produce a notification.
    pub fn notifiable(&self) -> Option<&Article> {
        match self {
            FeedEvent::Created(a) | FeedEvent::Updated(a) => Some(a),
            FeedEvent::Deleted(_) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FeedEvent::Created(_) => crate::realtime::EVENT_ARTICLE_CREATED,
            FeedEvent::Updated(_) => crate::realtime::EVENT_ARTICLE_UPDATED,
            FeedEvent::Deleted(_) => crate::realtime::EVENT_ARTICLE_DELETED,
        }
    }
}

/// Ordered, id-unique list of articles shown in the main feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    articles: Vec<Article>,
}

impl FeedState {
    /// Initial state from a full fetch; server order is kept and later
    /// duplicates of an id are dropped.
    pub fn from_articles(articles: Vec<Article>) -> Self {
        let mut state = Self {
            articles: Vec::with_capacity(articles.len()),
        };
        for article in articles {
            if state.position(&article.id).is_some() {
                debug!(article_id = %article.id, "Dropping duplicate article from fetch");
                continue;
            }
            state.articles.push(article);
        }
        state
    }

    /// Apply one delta.
    ///
    /// Create and update both drop any entry with the same id before
    /// prepending, so the uniqueness invariant holds even when a create is
    /// replayed. Delete of an unknown id is a no-op.
    pub fn apply(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Created(article) | FeedEvent::Updated(article) => {
                self.articles.retain(|a| a.id != article.id);
                self.articles.insert(0, article);
            }
            FeedEvent::Deleted(id) => {
                self.articles.retain(|a| a.id != id);
            }
        }
    }

    pub fn position(&self, id: &ArticleId) -> Option<usize> {
        self.articles.iter().position(|a| &a.id == id)
    }

    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| &a.id == id)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// What the presentation layer renders for the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Loading,
    Ready(FeedState),
    /// Initial fetch failed; retry with a refresh.
    Failed { message: String },
}

impl FeedStatus {
    pub fn state(&self) -> Option<&FeedState> {
        match self {
            FeedStatus::Ready(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, FeedStatus::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn article(id: &str, heading: &str) -> Article {
        Article {
            id: ArticleId::from(id),
            image_uri: String::new(),
            heading: heading.to_string(),
            text: String::new(),
            updated_at: Utc.with_ymd_and_hms(2024, 12, 15, 12, 0, 0).unwrap(),
        }
    }

    fn ids(state: &FeedState) -> Vec<&str> {
        state.articles().iter().map(|a| a.id.as_str()).collect()
    }

    fn ab() -> FeedState {
        FeedState::from_articles(vec![article("A", "a"), article("B", "b")])
    }

    #[test]
    fn create_prepends() {
        let mut state = ab();
        state.apply(FeedEvent::Created(article("C", "c")));
        assert_eq!(ids(&state), vec!["C", "A", "B"]);
    }

    #[test]
    fn update_replaces_and_moves_to_front() {
        let mut state = ab();
        state.apply(FeedEvent::Updated(article("B", "b prime")));
        assert_eq!(ids(&state), vec!["B", "A"]);
        assert_eq!(state.articles()[0].heading, "b prime");
    }

    #[test]
    fn update_of_unknown_id_prepends() {
        let mut state = ab();
        state.apply(FeedEvent::Updated(article("Z", "z")));
        assert_eq!(ids(&state), vec!["Z", "A", "B"]);
    }

    #[test]
    fn delete_removes() {
        let mut state = ab();
        state.apply(FeedEvent::Deleted("A".into()));
        assert_eq!(ids(&state), vec!["B"]);
    }

    #[test]
    fn delete_of_unknown_id_is_noop() {
        let mut state = ab();
        state.apply(FeedEvent::Deleted("nope".into()));
        assert_eq!(state, ab());
    }

    #[test]
    fn replayed_create_keeps_ids_unique() {
        let mut state = ab();
        state.apply(FeedEvent::Created(article("A", "again")));
        assert_eq!(ids(&state), vec!["A", "B"]);
    }

    #[test]
    fn events_apply_in_receipt_order() {
        let mut state = ab();
        state.apply(FeedEvent::Deleted("B".into()));
        state.apply(FeedEvent::Updated(article("B", "resurrected")));
        assert_eq!(ids(&state), vec!["B", "A"]);
    }

    #[test]
    fn fetch_duplicates_are_dropped() {
        let state = FeedState::from_articles(vec![
            article("A", "first"),
            article("A", "second"),
            article("B", "b"),
        ]);
        assert_eq!(ids(&state), vec!["A", "B"]);
        assert_eq!(state.get(&"A".into()).unwrap().heading, "first");
    }

    #[test]
    fn deleted_events_are_not_notifiable() {
        assert!(FeedEvent::Deleted("A".into()).notifiable().is_none());
        assert!(FeedEvent::Created(article("A", "a")).notifiable().is_some());
    }
}
