//! Bookmark manager: the in-memory authoritative bookmark set, kept in sync
//! with a [`BookmarkStorePort`].

use std::sync::Arc;

use nf_core::article::Article;
use nf_core::bookmarks::{BookmarkChange, BookmarkNotice, BookmarkSet};
use nf_core::ids::ArticleId;
use nf_core::ports::{BookmarkStoreError, BookmarkStorePort};
use tokio::sync::{broadcast, watch, Mutex};
use tracing::{debug, info, info_span, warn, Instrument};

const NOTICE_CAPACITY: usize = 32;

/// Result of [`BookmarkManager::toggle_bookmark`]: the in-memory change,
/// which always happened, and the outcome of persisting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub change: BookmarkChange,
    pub persisted: Result<(), BookmarkStoreError>,
}

pub struct BookmarkManager {
    store: Arc<dyn BookmarkStorePort>,
    state: watch::Sender<BookmarkSet>,
    notices: broadcast::Sender<BookmarkNotice>,
    // Serializes store writes; each write snapshots the state it finds.
    write_lock: Mutex<()>,
}

impl BookmarkManager {
    /// Starts empty; call [`BookmarkManager::initialize`] to load the
    /// persisted set.
    pub fn new(store: Arc<dyn BookmarkStorePort>) -> Self {
        let (state, _) = watch::channel(BookmarkSet::new());
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);
        Self {
            store,
            state,
            notices,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the persisted set once at startup.
    ///
    /// Nothing persisted leaves the set empty. A failed read leaves the set
    /// as it is and is returned for logging.
    pub async fn initialize(&self) -> Result<usize, BookmarkStoreError> {
        let span = info_span!("usecase.bookmarks.initialize");
        async {
            let loaded = self.reload().await?;
            info!(count = loaded, "Bookmarks loaded");
            Ok(loaded)
        }
        .instrument(span)
        .await
    }

    /// Re-read durable storage and overwrite the in-memory set.
    pub async fn refresh_bookmarks(&self) -> Result<usize, BookmarkStoreError> {
        let span = info_span!("usecase.bookmarks.refresh");
        async {
            let loaded = self.reload().await?;
            debug!(count = loaded, "Bookmarks refreshed from storage");
            Ok(loaded)
        }
        .instrument(span)
        .await
    }

    async fn reload(&self) -> Result<usize, BookmarkStoreError> {
        match self.store.load().await {
            Ok(Some(snapshots)) => {
                let set = BookmarkSet::from_snapshots(snapshots);
                let count = set.len();
                self.state.send_replace(set);
                Ok(count)
            }
            Ok(None) => {
                debug!("No persisted bookmarks; keeping in-memory set");
                Ok(self.state.borrow().len())
            }
            Err(err) => {
                warn!(error = %err, "Failed to load bookmarks; keeping in-memory set");
                Err(err)
            }
        }
    }

    /// Add the article if absent, remove it if present.
    ///
    /// Memory and subscribers are updated before the store is written; a
    /// failed write does not undo the change.
    pub async fn toggle_bookmark(&self, article: Article) -> ToggleOutcome {
        let span = info_span!("usecase.bookmarks.toggle", article_id = %article.id);
        async {
            let mut change = BookmarkChange::Added(article.id.clone());
            self.state.send_modify(|set| change = set.toggle(article));

            // No notice subscribers is fine.
            let _ = self.notices.send(BookmarkNotice::from(&change));

            let persisted = self.persist().await;
            if let Err(err) = &persisted {
                warn!(error = %err, "Bookmark change kept in memory but not persisted");
            }
            ToggleOutcome { change, persisted }
        }
        .instrument(span)
        .await
    }

    /// Remove every bookmark.
    pub async fn clear(&self) -> Result<(), BookmarkStoreError> {
        let span = info_span!("usecase.bookmarks.clear");
        async {
            self.state.send_modify(BookmarkSet::clear);
            self.persist().await
        }
        .instrument(span)
        .await
    }

    async fn persist(&self) -> Result<(), BookmarkStoreError> {
        let _guard = self.write_lock.lock().await;
        let snapshot = self.state.borrow().as_slice().to_vec();
        self.store.save(&snapshot).await
    }

    pub fn is_bookmarked(&self, id: &ArticleId) -> bool {
        self.state.borrow().contains(id)
    }

    /// Current set, most recently bookmarked first.
    pub fn bookmarks(&self) -> Vec<Article> {
        self.state.borrow().as_slice().to_vec()
    }

    pub fn subscribe(&self) -> watch::Receiver<BookmarkSet> {
        self.state.subscribe()
    }

    pub fn subscribe_notices(&self) -> broadcast::Receiver<BookmarkNotice> {
        self.notices.subscribe()
    }
}
