use std::sync::Arc;

use axum::{Json, extract::State};
use courier_optimizer::{problem::order::Order, solver::quote::round_cost};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::info;

use crate::{error::ApiError, state::AppState};

use super::validate_order;

#[derive(Serialize, JsonSchema)]
pub struct CalculateCostResponse {
    minimum_cost: i64,
}

pub async fn calculate_cost_handler(
    State(state): State<Arc<AppState>>,
    Json(order): Json<Order>,
) -> Result<Json<CalculateCostResponse>, ApiError> {
    validate_order(state.engine.catalog(), &order)?;

    let cost =
        tokio::task::spawn_blocking(move || state.engine.compute_minimum_cost(&order)).await??;
    info!(cost, "calculated minimum cost");

    Ok(Json(CalculateCostResponse {
        minimum_cost: round_cost(cost),
    }))
}
