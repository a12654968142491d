use std::sync::Arc;

use nf_core::article::Article;
use nf_core::ids::ArticleId;
use nf_core::ports::{ArticleApiError, ArticleApiPort};
use tracing::{info_span, Instrument};

/// Fetch one article directly, for articles no longer in the feed.
pub struct GetArticle {
    api: Arc<dyn ArticleApiPort>,
}

impl GetArticle {
    pub fn new(api: Arc<dyn ArticleApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, id: &ArticleId) -> Result<Article, ArticleApiError> {
        let span = info_span!("usecase.articles.get", article_id = %id);
        self.api.get(id).instrument(span).await
    }
}
