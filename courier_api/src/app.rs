use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter,
        routing::{get, post},
    },
    openapi::OpenApi,
    transform::TransformOpenApi,
};
use axum::{
    Extension, Router,
    http::{Method, StatusCode},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    catalog::catalog_handler,
    config::ApiConfig,
    cost::{calculate_cost::calculate_cost_handler, quote::quote_handler},
    docs::docs_routes,
    health::health_handler,
    state::AppState,
};

/// Builds the service router together with its OpenAPI document.
pub fn create_app(state: Arc<AppState>, config: &ApiConfig) -> (Router, Arc<OpenApi>) {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let router = ApiRouter::new()
        .api_route("/", get(health_handler))
        .api_route("/calculate-cost", post(calculate_cost_handler))
        .api_route("/quote", post(quote_handler))
        .api_route("/catalog", get(catalog_handler))
        .merge(docs_routes())
        .finish_api_with(&mut api, api_docs);

    let api = Arc::new(api);

    let app = router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout,
                ))
                .layer(cors_layer),
        )
        .layer(Extension(Arc::clone(&api)))
        .with_state(state);

    (app, api)
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Delivery Cost API")
        .version("1.0.0")
        .description("Minimum delivery cost of an order shipped from warehouse centers to the hub.")
}
