use std::sync::Arc;

use axum::{Json, extract::State};
use courier_optimizer::{problem::order::Order, solver::quote::Quote};

use crate::{error::ApiError, state::AppState};

use super::validate_order;

pub async fn quote_handler(
    State(state): State<Arc<AppState>>,
    Json(order): Json<Order>,
) -> Result<Json<Quote>, ApiError> {
    validate_order(state.engine.catalog(), &order)?;

    let quote = tokio::task::spawn_blocking(move || state.engine.quote(&order)).await??;

    Ok(Json(quote))
}
