use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// The closed set of failures the gateway reports to clients. The underlying
/// store error is logged, never echoed back in the response body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("the store rejected the write")]
    ValidationFailed(#[source] surrealdb::Error),
    #[error("song not found")]
    NotFound,
    #[error("the store is unavailable")]
    StoreUnavailable(#[source] surrealdb::Error),
}

impl GatewayError {
    fn status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed(_) => "validation_failed",
            Self::NotFound => "not_found",
            Self::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            Self::ValidationFailed(source) => warn!("store rejected write: {source}"),
            Self::StoreUnavailable(source) => error!("store call failed: {source}"),
            Self::NotFound => {}
        }

        let body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
