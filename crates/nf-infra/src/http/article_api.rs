//! reqwest client for the article service REST API.

use std::time::Duration;

use async_trait::async_trait;
use nf_core::article::{Article, ArticleDraft, ArticlePayload};
use nf_core::ids::ArticleId;
use nf_core::notification::PushRequest;
use nf_core::ports::{ArticleApiError, ArticleApiPort};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

pub struct HttpArticleApi {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    data: Value,
}

fn transport(e: reqwest::Error) -> ArticleApiError {
    ArticleApiError::Transport(e.to_string())
}

impl HttpArticleApi {
    /// `timeout` of `None` keeps reqwest's default (no timeout).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ArticleApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ArticleApiError::Transport(format!("invalid backend url {base_url}: {e}")))?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport)?;
        Ok(Self { client, base_url })
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ArticleApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ArticleApiError::Transport(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Pass successful responses through; map everything else to an error.
    async fn check(response: Response) -> Result<Response, ArticleApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ArticleApiError::NotFound);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.message)
            .unwrap_or(text);
        Err(ArticleApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ArticleApiError> {
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ArticleApiError::Decode(e.to_string()))
    }

    fn into_article(payload: ArticlePayload) -> Result<Article, ArticleApiError> {
        Article::try_from(payload).map_err(|e| ArticleApiError::Decode(e.to_string()))
    }

    /// List responses skip entries that fail translation instead of failing
    /// the whole list.
    fn into_articles(payloads: Vec<ArticlePayload>) -> Vec<Article> {
        payloads
            .into_iter()
            .filter_map(|p| match Article::try_from(p) {
                Ok(article) => Some(article),
                Err(err) => {
                    warn!(error = %err, "Skipping article with invalid payload");
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl ArticleApiPort for HttpArticleApi {
    async fn fetch_all(&self) -> Result<Vec<Article>, ArticleApiError> {
        let url = self.url(&["api", "articles"])?;
        debug!(%url, "Fetching articles");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let payloads: Vec<ArticlePayload> = Self::decode(response).await?;
        Ok(Self::into_articles(payloads))
    }

    async fn search(&self, query: &str) -> Result<Vec<Article>, ArticleApiError> {
        let mut url = self.url(&["api", "articles", "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        let response = self.client.get(url).send().await.map_err(transport)?;
        let payloads: Vec<ArticlePayload> = Self::decode(response).await?;
        Ok(Self::into_articles(payloads))
    }

    async fn get(&self, id: &ArticleId) -> Result<Article, ArticleApiError> {
        let url = self.url(&["api", "articles", id.as_str()])?;
        let response = self.client.get(url).send().await.map_err(transport)?;
        Self::into_article(Self::decode(response).await?)
    }

    async fn create(&self, draft: &ArticleDraft) -> Result<Article, ArticleApiError> {
        let url = self.url(&["api", "articles"])?;
        let response = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        Self::into_article(Self::decode(response).await?)
    }

    async fn update(&self, id: &ArticleId, draft: &ArticleDraft) -> Result<Article, ArticleApiError> {
        let url = self.url(&["api", "articles", id.as_str()])?;
        let response = self
            .client
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        Self::into_article(Self::decode(response).await?)
    }

    async fn delete(&self, id: &ArticleId) -> Result<(), ArticleApiError> {
        let url = self.url(&["api", "articles", id.as_str()])?;
        let response = self.client.delete(url).send().await.map_err(transport)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn send_notification(&self, request: &PushRequest) -> Result<Value, ArticleApiError> {
        let url = self.url(&["api", "send-notification"])?;
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let body: RelayResponse = Self::decode(response).await?;
        Ok(body.data)
    }
}
