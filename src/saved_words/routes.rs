use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/saved-words", get(handler::list_saved_words))
        .route("/saved-words", post(handler::save_word))
        .route("/saved-words", delete(handler::remove_saved_word))
}
