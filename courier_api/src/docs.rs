use std::sync::Arc;

use aide::{axum::ApiRouter, openapi::OpenApi, scalar::Scalar};
use axum::{
    Extension, Json,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::state::AppState;

pub const OPENAPI_PATH: &str = "/api/openapi.json";

pub fn docs_routes() -> ApiRouter<Arc<AppState>> {
    ApiRouter::new()
        .route(
            "/api/docs",
            get(Scalar::new(OPENAPI_PATH)
                .with_title("Delivery Cost API")
                .axum_handler()),
        )
        .route(OPENAPI_PATH, get(serve_docs))
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> Response {
    Json(api).into_response()
}
