use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub struct RootController;

impl RootController {
    pub async fn root() -> Response {
        Json(json!({
            "service": "songs-api",
            "status": "ok",
        }))
        .into_response()
    }

    pub async fn health_check() -> Response {
        (StatusCode::OK, Json(json!({"status": "healthy"}))).into_response()
    }
}
