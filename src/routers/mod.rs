pub mod root;
pub mod song;
pub use root::{health_check_route, root_route};
pub use song::song_routes;

use axum::Router;
use axum::routing::get;

use crate::db::Database;

/// The full route table over an injected store handle. Middleware (CORS,
/// request tracing) is layered on top by the bootstrap.
pub fn app(database: Database) -> Router {
    Router::new()
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        .nest("/api", song_routes())
        .with_state(database)
}
