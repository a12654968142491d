//! Article feed controller: owns the feed state shown to the user.

use std::sync::Arc;

use nf_core::article::Article;
use nf_core::feed::{FeedEvent, FeedState, FeedStatus};
use nf_core::ids::ArticleId;
use nf_core::notification::{resolve_tap, TapTarget};
use nf_core::ports::{ArticleApiError, ArticleApiPort};
use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};

pub struct FeedController {
    api: Arc<dyn ArticleApiPort>,
    status: watch::Sender<FeedStatus>,
}

impl FeedController {
    pub fn new(api: Arc<dyn ArticleApiPort>) -> Self {
        let (status, _) = watch::channel(FeedStatus::Loading);
        Self { api, status }
    }

    /// Initial fetch. Moves the status to `Ready` or `Failed`.
    pub async fn load(&self) -> Result<usize, ArticleApiError> {
        let span = info_span!("usecase.feed.load");
        async {
            self.status.send_replace(FeedStatus::Loading);
            self.fetch_into_state().await
        }
        .instrument(span)
        .await
    }

    /// Fetch again and replace the feed.
    ///
    /// If a feed is already showing and the fetch fails, the old articles
    /// stay and the error is only returned.
    pub async fn refresh(&self) -> Result<usize, ArticleApiError> {
        let span = info_span!("usecase.feed.refresh");
        async { self.fetch_into_state().await }
            .instrument(span)
            .await
    }

    async fn fetch_into_state(&self) -> Result<usize, ArticleApiError> {
        match self.api.fetch_all().await {
            Ok(articles) => {
                let state = FeedState::from_articles(articles);
                let count = state.len();
                self.status.send_replace(FeedStatus::Ready(state));
                info!(count, "Feed loaded");
                Ok(count)
            }
            Err(err) => {
                let showing = self.status.borrow().state().is_some();
                if showing {
                    warn!(error = %err, "Feed refresh failed; keeping current articles");
                } else {
                    warn!(error = %err, "Feed fetch failed");
                    self.status.send_replace(FeedStatus::Failed {
                        message: err.to_string(),
                    });
                }
                Err(err)
            }
        }
    }

    /// Apply one realtime delta. Returns `false` when no feed is showing yet,
    /// in which case the event is dropped.
    pub fn apply(&self, event: FeedEvent) -> bool {
        self.status.send_if_modified(|status| match status {
            FeedStatus::Ready(state) => {
                state.apply(event);
                true
            }
            _ => {
                debug!(event = event.name(), "No feed loaded; dropping realtime event");
                false
            }
        })
    }

    pub fn status(&self) -> FeedStatus {
        self.status.borrow().clone()
    }

    /// Articles currently shown; empty unless the feed is `Ready`.
    pub fn articles(&self) -> Vec<Article> {
        self.status
            .borrow()
            .state()
            .map(|s| s.articles().to_vec())
            .unwrap_or_default()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedStatus> {
        self.status.subscribe()
    }

    /// Where a tap on the notification for `article_id` leads.
    pub fn resolve_tap(&self, article_id: &ArticleId) -> TapTarget {
        match self.status.borrow().state() {
            Some(state) => resolve_tap(state, article_id),
            None => TapTarget::Navigate(article_id.clone()),
        }
    }
}
