use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use nf_core::article::{ArticleDraft, ArticleRecord};
use nf_core::ids::ArticleId;
use serde::Deserialize;

use super::AppState;
use crate::error::ServiceError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route("/articles/search", get(search_articles))
        .route(
            "/articles/{id}",
            get(get_article).put(update_article).delete(delete_article),
        )
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleRecord>>, ServiceError> {
    Ok(Json(state.articles.list().await?))
}

async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ArticleRecord>>, ServiceError> {
    Ok(Json(state.articles.search(params.q.as_deref()).await?))
}

async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleRecord>, ServiceError> {
    Ok(Json(state.articles.get(&ArticleId::from(id)).await?))
}

async fn create_article(
    State(state): State<AppState>,
    body: Result<Json<ArticleDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<ArticleRecord>), ServiceError> {
    let Json(draft) = body?;
    let created = state.articles.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ArticleDraft>, JsonRejection>,
) -> Result<Json<ArticleRecord>, ServiceError> {
    let Json(draft) = body?;
    Ok(Json(state.articles.update(&ArticleId::from(id), draft).await?))
}

async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    state.articles.delete(&ArticleId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
