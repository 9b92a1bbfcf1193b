use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::{bad_request, created, internal_error, success};
use crate::handler::AppState;
use crate::store::SaveOutcome;
use crate::unpack_error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveWordRequest {
    #[serde(default)]
    pub word_id: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveParams {
    pub id: Option<String>,
}

pub async fn list_saved_words(State(state): State<AppState>) -> Response {
    match state.store.list_saved_words().await {
        Ok(saved) => success(saved),
        Err(e) => {
            tracing::error!("failed to list saved words: {}", e);
            internal_error(&unpack_error(&e))
        }
    }
}

pub async fn save_word(
    State(state): State<AppState>,
    Json(payload): Json<SaveWordRequest>,
) -> Response {
    match state.store.save_word(&payload.word_id).await {
        Ok(SaveOutcome::Created(record)) => created(record),
        Ok(SaveOutcome::Exists(record)) => success(record),
        Err(e) => {
            tracing::error!("failed to save word: {}", e);
            internal_error(&unpack_error(&e))
        }
    }
}

pub async fn remove_saved_word(
    State(state): State<AppState>,
    Query(params): Query<RemoveParams>,
) -> Response {
    let Some(id) = params.id else {
        return bad_request("id required");
    };

    match state.store.remove_saved_word(&id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::error!("failed to remove saved word: {}", e);
            internal_error(&unpack_error(&e))
        }
    }
}
