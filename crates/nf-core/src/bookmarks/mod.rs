//! Bookmark set domain model.
//!
//! A bookmark is a full [`Article`] snapshot taken at bookmark time. The set
//! is ordered most-recently-bookmarked-first and never holds two snapshots
//! with the same id.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::article::Article;
use crate::ids::ArticleId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookmarkSet {
    items: Vec<Article>,
}

/// Outcome of a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkChange {
    Added(ArticleId),
    Removed(ArticleId),
}

impl BookmarkChange {
    pub fn article_id(&self) -> &ArticleId {
        match self {
            BookmarkChange::Added(id) | BookmarkChange::Removed(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-visible confirmation of a toggle (a toast in a graphical front-end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkNotice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: &'static str,
    pub article_id: ArticleId,
}

impl From<&BookmarkChange> for BookmarkNotice {
    fn from(change: &BookmarkChange) -> Self {
        match change {
            BookmarkChange::Added(id) => BookmarkNotice {
                kind: NoticeKind::Success,
                title: "Bookmarked",
                message: "Article has been added to your bookmarks.",
                article_id: id.clone(),
            },
            BookmarkChange::Removed(id) => BookmarkNotice {
                kind: NoticeKind::Error,
                title: "Bookmark Removed",
                message: "Article has been removed from your bookmarks.",
                article_id: id.clone(),
            },
        }
    }
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from persisted snapshots, keeping the first occurrence of
    /// any duplicated id.
    pub fn from_snapshots(snapshots: Vec<Article>) -> Self {
        let mut items: Vec<Article> = Vec::with_capacity(snapshots.len());
        for article in snapshots {
            if items.iter().any(|a| a.id == article.id) {
                debug!(article_id = %article.id, "Dropping duplicate bookmark snapshot");
                continue;
            }
            items.push(article);
        }
        Self { items }
    }

    pub fn contains(&self, id: &ArticleId) -> bool {
        self.items.iter().any(|a| &a.id == id)
    }

    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.items.iter().find(|a| &a.id == id)
    }

    /// Remove the snapshot with `article.id` if present, otherwise insert
    /// `article` at the front.
    pub fn toggle(&mut self, article: Article) -> BookmarkChange {
        if let Some(pos) = self.items.iter().position(|a| a.id == article.id) {
            let removed = self.items.remove(pos);
            BookmarkChange::Removed(removed.id)
        } else {
            let id = article.id.clone();
            self.items.insert(0, article);
            BookmarkChange::Added(id)
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Article] {
        &self.items
    }
}

impl<'de> Deserialize<'de> for BookmarkSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<Article>::deserialize(deserializer).map(BookmarkSet::from_snapshots)
    }
}
