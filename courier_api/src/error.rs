use aide::OperationOutput;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courier_optimizer::error::EngineError;
use tokio::task::JoinError;
use tracing::{error, warn};

pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::UnknownProduct(_) => {
                warn!("{}", error);
                ApiError::BadRequest(error.to_string())
            }
            EngineError::MissingDistance { .. } => {
                error!("catalog is incomplete: {}", error);
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(error: JoinError) -> Self {
        error!("cost computation did not complete: {}", error);
        ApiError::InternalServerError(String::from("Cost computation failed"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}

impl OperationOutput for ApiError {
    type Inner = ();
}
