use std::sync::Arc;

use nf_core::article::Article;
use nf_core::ports::{ArticleApiError, ArticleApiPort};
use tracing::{debug, info_span, Instrument};

/// Search articles by heading or text through the backend.
pub struct SearchArticles {
    api: Arc<dyn ArticleApiPort>,
}

impl SearchArticles {
    pub fn new(api: Arc<dyn ArticleApiPort>) -> Self {
        Self { api }
    }

    /// A blank query returns no results without contacting the backend.
    pub async fn execute(&self, query: &str) -> Result<Vec<Article>, ArticleApiError> {
        let query = query.trim();
        let span = info_span!("usecase.articles.search", query);
        async {
            if query.is_empty() {
                debug!("Blank search query; skipping request");
                return Ok(Vec::new());
            }
            let results = self.api.search(query).await?;
            debug!(count = results.len(), "Search finished");
            Ok(results)
        }
        .instrument(span)
        .await
    }
}
