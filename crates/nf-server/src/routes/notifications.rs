use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use nf_core::notification::PushRequest;
use serde::Serialize;
use serde_json::Value;

use super::AppState;
use crate::error::ServiceError;

pub fn routes() -> Router<AppState> {
    Router::new().route("/send-notification", post(send_notification))
}

#[derive(Debug, Serialize)]
struct RelayResponse {
    success: bool,
    data: Value,
}

async fn send_notification(
    State(state): State<AppState>,
    body: Result<Json<PushRequest>, JsonRejection>,
) -> Result<Json<RelayResponse>, ServiceError> {
    let Json(request) = body.map_err(|r| ServiceError::InvalidPush(r.body_text()))?;
    let data = state.push.execute(request).await?;
    Ok(Json(RelayResponse {
        success: true,
        data,
    }))
}
