//! Admin article management: submit, edit and delete through the backend,
//! with drafts checked locally first.

use std::sync::Arc;

use nf_core::article::{Article, ArticleDraft, DraftValidationError};
use nf_core::ids::ArticleId;
use nf_core::ports::{ArticleApiError, ArticleApiPort};
use tracing::{info, info_span, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum ManageArticlesError {
    #[error(transparent)]
    Invalid(#[from] DraftValidationError),

    #[error(transparent)]
    Api(#[from] ArticleApiError),
}

pub struct ManageArticles {
    api: Arc<dyn ArticleApiPort>,
}

impl ManageArticles {
    pub fn new(api: Arc<dyn ArticleApiPort>) -> Self {
        Self { api }
    }

    pub async fn create(&self, draft: ArticleDraft) -> Result<Article, ManageArticlesError> {
        let span = info_span!("usecase.articles.create");
        async {
            let draft = draft.normalized();
            draft.validate()?;
            let article = self.api.create(&draft).await?;
            info!(article_id = %article.id, "Article submitted");
            Ok(article)
        }
        .instrument(span)
        .await
    }

    pub async fn update(
        &self,
        id: &ArticleId,
        draft: ArticleDraft,
    ) -> Result<Article, ManageArticlesError> {
        let span = info_span!("usecase.articles.update", article_id = %id);
        async {
            let draft = draft.normalized();
            draft.validate()?;
            let article = self.api.update(id, &draft).await?;
            info!("Article updated");
            Ok(article)
        }
        .instrument(span)
        .await
    }

    pub async fn delete(&self, id: &ArticleId) -> Result<(), ManageArticlesError> {
        let span = info_span!("usecase.articles.delete", article_id = %id);
        async {
            self.api.delete(id).await?;
            info!("Article deleted");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
