use anyhow::Context;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

mod controllers;
mod db;
mod error;
mod models;
mod routers;
mod secrets;

use crate::secrets::SECRET_MANAGER;
use db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    // The store connection is confirmed before the listener opens, so no
    // request can arrive ahead of a usable connection.
    let database = Database::new()
        .await
        .context("failed to connect to the song store")?;
    info!("Connected to the database");

    let port = SECRET_MANAGER.get("PORT");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routers::app(database)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Server is running on port {port}");
    axum::serve(listener, app)
        .await
        .context("server exited with an error")?;
    Ok(())
}
