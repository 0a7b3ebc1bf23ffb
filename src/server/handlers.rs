use super::types::{ChatResponse, StatusResponse};
use crate::{
    Error,
    relay::{Message, UpstreamClient},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const SERVICE_NAME: &str = "TrustyBot API";

/// Shared across requests; immutable after startup, so no locking.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamClient>,
}

/// Relay a chat request to the upstream API.
///
/// Any body that is not a JSON object carrying a non-empty, well-formed
/// `messages` list is rejected up front; the message sequence itself is
/// forwarded verbatim.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, Error> {
    let Json(body) = payload.map_err(|_| Error::validation("messages required"))?;

    let messages: Vec<Message> = match body.get("messages") {
        Some(raw) => serde_json::from_value(raw.clone())
            .map_err(|_| Error::validation("messages required"))?,
        None => return Err(Error::validation("messages required")),
    };
    if messages.is_empty() {
        return Err(Error::validation("messages required"));
    }

    info!("relaying chat request with {} messages", messages.len());

    let content = state.upstream.complete(&messages).await?;

    Ok(Json(ChatResponse { content }))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        service: SERVICE_NAME,
        endpoints: None,
    })
}

/// Root endpoint, also used by the hosting platform's health checks.
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        service: SERVICE_NAME,
        endpoints: Some(vec!["/api/chat", "/api/health"]),
    })
}
