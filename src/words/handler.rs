use axum::{Json, extract::State, response::Response};
use serde::Deserialize;

use crate::api::{created, internal_error, success};
use crate::handler::AppState;
use crate::unpack_error;

/// Inbound word payload. Any client-sent id is ignored; the store assigns
/// one.
#[derive(Debug, Deserialize)]
pub struct CreateWordRequest {
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub bangla: String,
}

pub async fn list_words(State(state): State<AppState>) -> Response {
    match state.store.list_words().await {
        Ok(words) => success(words),
        Err(e) => {
            tracing::error!("failed to list words: {}", e);
            internal_error(&unpack_error(&e))
        }
    }
}

pub async fn add_word(
    State(state): State<AppState>,
    Json(payload): Json<CreateWordRequest>,
) -> Response {
    match state.store.add_word(payload.english, payload.bangla).await {
        Ok(word) => created(word),
        Err(e) => {
            tracing::error!("failed to add word: {}", e);
            internal_error(&unpack_error(&e))
        }
    }
}
