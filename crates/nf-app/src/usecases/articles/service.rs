//! Server-side article service: CRUD and search over the repository, with
//! every mutation published to realtime subscribers.

use std::sync::Arc;

use nf_core::article::{ArticleDraft, ArticlePayload, ArticleRecord, DraftValidationError};
use nf_core::ids::ArticleId;
use nf_core::ports::{
    ArticleEventPublisherPort, ArticleRepositoryError, ArticleRepositoryPort, ClockPort,
};
use nf_core::realtime::ServerEvent;
use tracing::{debug, info, info_span, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum ArticleServiceError {
    #[error(transparent)]
    Invalid(#[from] DraftValidationError),

    #[error("search query is required")]
    MissingQuery,

    #[error("article {0} not found")]
    NotFound(ArticleId),

    #[error(transparent)]
    Repository(ArticleRepositoryError),
}

impl From<ArticleRepositoryError> for ArticleServiceError {
    fn from(err: ArticleRepositoryError) -> Self {
        ArticleServiceError::Repository(err)
    }
}

pub struct ArticleService {
    repo: Arc<dyn ArticleRepositoryPort>,
    events: Arc<dyn ArticleEventPublisherPort>,
    clock: Arc<dyn ClockPort>,
}

impl ArticleService {
    pub fn new(
        repo: Arc<dyn ArticleRepositoryPort>,
        events: Arc<dyn ArticleEventPublisherPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            repo,
            events,
            clock,
        }
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<ArticleRecord>, ArticleServiceError> {
        let span = info_span!("usecase.articles.list");
        async { Ok(self.repo.list().await?) }.instrument(span).await
    }

    pub async fn search(&self, query: Option<&str>) -> Result<Vec<ArticleRecord>, ArticleServiceError> {
        let term = query.map(str::trim).unwrap_or_default();
        let span = info_span!("usecase.articles.search", term);
        async {
            if term.is_empty() {
                return Err(ArticleServiceError::MissingQuery);
            }
            let found = self.repo.search(term).await?;
            debug!(count = found.len(), "Search matched");
            Ok(found)
        }
        .instrument(span)
        .await
    }

    pub async fn get(&self, id: &ArticleId) -> Result<ArticleRecord, ArticleServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ArticleServiceError::NotFound(id.clone()))
    }

    /// Store a new article and announce it. The draft's timestamp is kept
    /// when present.
    pub async fn create(&self, draft: ArticleDraft) -> Result<ArticleRecord, ArticleServiceError> {
        let span = info_span!("usecase.articles.create");
        async {
            let draft = draft.normalized();
            draft.validate()?;

            let record = ArticleRecord {
                id: ArticleId::generate(),
                image_link: draft.image_link,
                heading: draft.heading,
                text: draft.text,
                likes: 0,
                uploaded_at: draft.uploaded_at.unwrap_or_else(|| self.clock.now()),
            };
            let stored = self.repo.insert(record).await?;

            let reached = self
                .events
                .publish(ServerEvent::ArticleCreated(ArticlePayload::from(&stored)));
            info!(article_id = %stored.id, subscribers = reached, "Article created");
            Ok(stored)
        }
        .instrument(span)
        .await
    }

    /// Replace an article's content; the id is kept and the timestamp is
    /// refreshed.
    pub async fn update(
        &self,
        id: &ArticleId,
        draft: ArticleDraft,
    ) -> Result<ArticleRecord, ArticleServiceError> {
        let span = info_span!("usecase.articles.update", article_id = %id);
        async {
            let draft = draft.normalized();
            draft.validate()?;

            let record = ArticleRecord {
                id: id.clone(),
                image_link: draft.image_link,
                heading: draft.heading,
                text: draft.text,
                likes: 0,
                uploaded_at: self.clock.now(),
            };
            let stored = match self.repo.update(record).await {
                Ok(stored) => stored,
                Err(ArticleRepositoryError::NotFound) => {
                    return Err(ArticleServiceError::NotFound(id.clone()))
                }
                Err(err) => return Err(err.into()),
            };

            let reached = self
                .events
                .publish(ServerEvent::ArticleUpdated(ArticlePayload::from(&stored)));
            info!(subscribers = reached, "Article updated");
            Ok(stored)
        }
        .instrument(span)
        .await
    }

    /// Remove an article. Unknown ids are not an error and are still
    /// announced.
    pub async fn delete(&self, id: &ArticleId) -> Result<(), ArticleServiceError> {
        let span = info_span!("usecase.articles.delete", article_id = %id);
        async {
            let removed = self.repo.delete(id).await?;
            let reached = self
                .events
                .publish(ServerEvent::ArticleDeleted(id.to_string()));
            info!(removed, subscribers = reached, "Article deleted");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
