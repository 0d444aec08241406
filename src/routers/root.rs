use axum::extract::State;
use axum::response::Response;

use crate::controllers::RootController;
use crate::db::Database;

pub async fn root_route(State(_database): State<Database>) -> Response {
    RootController::root().await
}

pub async fn health_check_route(State(_database): State<Database>) -> Response {
    RootController::health_check().await
}
