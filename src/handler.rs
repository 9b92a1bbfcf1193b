use std::sync::Arc;

use axum::{Json, response::IntoResponse};
use tracing::info;

use crate::store::Storage;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Storage>,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(serde_json::json!({ "status": "ok" }))
}
