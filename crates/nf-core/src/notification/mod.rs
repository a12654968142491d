//! Notification shapes: the local "article changed" notification, tap
//! resolution and the push relay contract.

mod push;

pub use push::{PushMessage, PushRequest, PushValidationError, EXPO_TOKEN_PREFIX};

use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::feed::FeedState;
use crate::ids::ArticleId;

pub const TITLE_MAX_CHARS: usize = 40;
pub const BODY_MAX_CHARS: usize = 80;
const ELLIPSIS: &str = "...";

/// `(title, body, article id)` handed to the platform notification facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleNotification {
    pub title: String,
    pub body: String,
    pub article_id: ArticleId,
}

impl ArticleNotification {
    pub fn for_article(article: &Article) -> Self {
        Self {
            title: truncate(&article.heading, TITLE_MAX_CHARS),
            body: truncate(&article.text, BODY_MAX_CHARS),
            article_id: article.id.clone(),
        }
    }
}

/// Keep the first `max` characters, appending `...` when anything was cut.
pub fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}{}", &s[..byte_idx], ELLIPSIS),
        None => s.to_string(),
    }
}

/// Where tapping a notification leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapTarget {
    /// The article is in the feed at this index.
    ScrollTo(usize),
    /// Not in the feed any more; open it directly.
    Navigate(ArticleId),
}

pub fn resolve_tap(feed: &FeedState, article_id: &ArticleId) -> TapTarget {
    match feed.position(article_id) {
        Some(index) => TapTarget::ScrollTo(index),
        None => TapTarget::Navigate(article_id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(id: &str, heading: &str, text: &str) -> Article {
        Article {
            id: ArticleId::from(id),
            image_uri: String::new(),
            heading: heading.to_string(),
            text: text.to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn short_fields_are_untouched() {
        let n = ArticleNotification::for_article(&article("1", "Short", "Also short"));
        assert_eq!(n.title, "Short");
        assert_eq!(n.body, "Also short");
        assert_eq!(n.article_id.as_str(), "1");
    }

    #[test]
    fn long_fields_are_cut_with_ellipsis() {
        let heading = "h".repeat(41);
        let text = "t".repeat(200);
        let n = ArticleNotification::for_article(&article("1", &heading, &text));
        assert_eq!(n.title, format!("{}...", "h".repeat(40)));
        assert_eq!(n.body, format!("{}...", "t".repeat(80)));
    }

    #[test]
    fn exact_length_is_not_cut() {
        assert_eq!(truncate(&"x".repeat(40), 40), "x".repeat(40));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let s = "é".repeat(45);
        assert_eq!(truncate(&s, 40), format!("{}...", "é".repeat(40)));
    }

    #[test]
    fn tap_scrolls_when_present_else_navigates() {
        let feed = FeedState::from_articles(vec![article("a", "", ""), article("b", "", "")]);
        assert_eq!(resolve_tap(&feed, &"b".into()), TapTarget::ScrollTo(1));
        assert_eq!(
            resolve_tap(&feed, &"gone".into()),
            TapTarget::Navigate("gone".into())
        );
    }
}
