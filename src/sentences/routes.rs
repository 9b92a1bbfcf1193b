use axum::{
    Router,
    routing::{get, post},
};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sentences", get(handler::list_sentences))
        .route("/sentences", post(handler::add_sentence))
}
