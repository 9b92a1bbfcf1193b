use axum::{
    Json,
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::api::{created, internal_error, success};
use crate::handler::AppState;
use crate::model::Sentence;
use crate::unpack_error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceQuery {
    pub word_id: Option<String>,
}

pub async fn list_sentences(
    State(state): State<AppState>,
    Query(query): Query<SentenceQuery>,
) -> Response {
    match state.store.list_sentences(query.word_id.as_deref()).await {
        Ok(sentences) => success(sentences),
        Err(e) => {
            tracing::error!("failed to list sentences: {}", e);
            internal_error(&unpack_error(&e))
        }
    }
}

pub async fn add_sentence(
    State(state): State<AppState>,
    Json(payload): Json<Sentence>,
) -> Response {
    match state.store.add_sentence(payload).await {
        Ok(sentence) => created(sentence),
        Err(e) => {
            tracing::error!("failed to add sentence: {}", e);
            internal_error(&unpack_error(&e))
        }
    }
}
