mod articles;
mod notifications;
mod ws;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use nf_app::{ArticleService, SendPushNotification};
use serde_json::{json, Value};

use crate::hub::EventHub;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<ArticleService>,
    pub push: Arc<SendPushNotification>,
    pub hub: EventHub,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/ws", get(ws::upgrade))
        .nest("/api", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(articles::routes())
        .merge(notifications::routes())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "API is running" }))
}
