use std::sync::Arc;

use axum::{Json, extract::State};
use courier_optimizer::json::types::JsonCatalog;

use crate::state::AppState;

pub async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<JsonCatalog> {
    Json(JsonCatalog::from(state.engine.catalog().as_ref()))
}
