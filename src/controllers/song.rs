use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::db::Database;
use crate::models::song::{SongDraft, SongPayload};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub genre: Option<String>,
}

/// Gateway operations over the song collection. Each one is a single store
/// call; errors carry their own HTTP mapping.
pub struct SongController;

impl SongController {
    pub async fn create(database: &Database, payload: SongPayload) -> Response {
        match database.insert_songs(payload.into_drafts()).await {
            Ok(created) => {
                info!("Added {} song(s)", created.len());
                (StatusCode::CREATED, Json(created)).into_response()
            }
            Err(err) => err.into_response(),
        }
    }

    pub async fn list(database: &Database, params: ListParams) -> Response {
        match database.list_songs(params.genre.as_deref()).await {
            Ok(songs) => Json(songs).into_response(),
            Err(err) => err.into_response(),
        }
    }

    pub async fn update(database: &Database, id: &str, draft: SongDraft) -> Response {
        match database.replace_song(id, draft).await {
            Ok(song) => {
                info!("Updated song with ID: {id}");
                Json(song).into_response()
            }
            Err(err) => err.into_response(),
        }
    }

    pub async fn delete(database: &Database, id: &str) -> Response {
        match database.delete_song(id).await {
            Ok(_) => {
                info!("Deleted song with ID: {id}");
                Json(json!({"message": "Song deleted successfully"})).into_response()
            }
            Err(err) => err.into_response(),
        }
    }

    pub async fn stats(database: &Database) -> Response {
        match database.stats().await {
            Ok(stats) => Json(stats).into_response(),
            Err(err) => err.into_response(),
        }
    }
}
