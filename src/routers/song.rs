use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use crate::controllers::{ListParams, SongController};
use crate::db::Database;
use crate::models::song::{SongDraft, SongPayload};

/// The /songs surface. The stats path is static, so the router resolves it
/// ahead of the `{id}` routes no matter the registration order.
pub fn song_routes() -> Router<Database> {
    Router::new()
        .route("/songs", get(list_songs_route).post(create_songs_route))
        .route("/songs/stats", get(song_stats_route))
        .route(
            "/songs/{id}",
            axum::routing::put(update_song_route).delete(delete_song_route),
        )
}

pub async fn create_songs_route(
    State(database): State<Database>,
    Json(payload): Json<SongPayload>,
) -> Response {
    SongController::create(&database, payload).await
}

pub async fn list_songs_route(
    State(database): State<Database>,
    Query(params): Query<ListParams>,
) -> Response {
    SongController::list(&database, params).await
}

pub async fn song_stats_route(State(database): State<Database>) -> Response {
    SongController::stats(&database).await
}

pub async fn update_song_route(
    State(database): State<Database>,
    Path(id): Path<String>,
    Json(draft): Json<SongDraft>,
) -> Response {
    SongController::update(&database, &id, draft).await
}

pub async fn delete_song_route(
    State(database): State<Database>,
    Path(id): Path<String>,
) -> Response {
    SongController::delete(&database, &id).await
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::db::Database;
    use crate::routers::app;

    async fn test_app() -> Result<Router> {
        Ok(app(Database::connect("mem://").await?))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Result<Value> {
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[tokio::test]
    async fn create_single_song_returns_201_with_id() -> Result<()> {
        let app = test_app().await?;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/songs",
                json!({"title": "Holiday", "artist": "Green Day", "album": "American Idiot", "genre": "Rock"}),
            ))
            .await?;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await?;
        let created = body.as_array().unwrap();
        assert_eq!(created.len(), 1);
        assert!(created[0]["id"].is_string());
        assert_eq!(created[0]["title"], json!("Holiday"));
        Ok(())
    }

    #[tokio::test]
    async fn create_sequence_returns_one_record_per_draft() -> Result<()> {
        let app = test_app().await?;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/songs",
                json!([
                    {"title": "One", "genre": "Rock"},
                    {"title": "Two", "genre": "Jazz"},
                    {"title": "Three"},
                ]),
            ))
            .await?;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await?;
        assert_eq!(body.as_array().unwrap().len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_genre_substring() -> Result<()> {
        let app = test_app().await?;
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/songs",
                json!([
                    {"title": "One", "genre": "Rock"},
                    {"title": "Two", "genre": "Jazz"},
                ]),
            ))
            .await?;

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/songs?genre=roc"))
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await?;
        let songs = body.as_array().unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0]["genre"], json!("Rock"));

        let response = app.oneshot(empty_request("GET", "/api/songs")).await?;
        let body = body_json(response).await?;
        assert_eq!(body.as_array().unwrap().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_instead_of_merging() -> Result<()> {
        let app = test_app().await?;
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/songs",
                json!({"title": "Holiday", "artist": "Green Day", "genre": "Rock"}),
            ))
            .await?;
        let created = body_json(response).await?;
        let id = created[0]["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/songs/{id}"),
                json!({"title": "X"}),
            ))
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await?;
        assert_eq!(body["title"], json!("X"));
        assert_eq!(body.get("artist"), None);
        assert_eq!(body.get("genre"), None);
        Ok(())
    }

    #[tokio::test]
    async fn update_on_unknown_id_is_404() -> Result<()> {
        let app = test_app().await?;

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/songs/doesnotexist",
                json!({"title": "X"}),
            ))
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await?;
        assert_eq!(body["error"], json!("not_found"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_delete_again_is_404() -> Result<()> {
        let app = test_app().await?;
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/songs", json!({"title": "One"})))
            .await?;
        let created = body_json(response).await?;
        let id = created[0]["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/api/songs/{id}")))
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await?;
        assert_eq!(body["message"], json!("Song deleted successfully"));

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/songs"))
            .await?;
        let body = body_json(response).await?;
        assert_eq!(body.as_array().unwrap().len(), 0);

        let response = app
            .oneshot(empty_request("DELETE", &format!("/api/songs/{id}")))
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn stats_path_is_never_parsed_as_an_id() -> Result<()> {
        let app = test_app().await?;

        let response = app
            .oneshot(empty_request("GET", "/api/songs/stats"))
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await?;
        assert_eq!(body["totalSongs"], json!(0));
        Ok(())
    }

    #[tokio::test]
    async fn stats_reports_counts_and_breakdowns() -> Result<()> {
        let app = test_app().await?;
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/songs",
                json!([
                    {"artist": "A", "album": "X", "genre": "Rock"},
                    {"artist": "A", "album": "Y", "genre": "Rock"},
                    {"artist": "B", "album": "X", "genre": "Jazz"},
                ]),
            ))
            .await?;

        let response = app
            .oneshot(empty_request("GET", "/api/songs/stats"))
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await?;

        assert_eq!(body["totalSongs"], json!(3));
        assert_eq!(body["totalArtists"], json!(2));
        assert_eq!(body["totalAlbums"], json!(2));
        assert_eq!(body["totalGenres"], json!(2));

        let genre_stats = body["genreStats"].as_array().unwrap();
        assert!(genre_stats.contains(&json!({"genre": "Rock", "count": 2})));
        assert!(genre_stats.contains(&json!({"genre": "Jazz", "count": 1})));

        let artist_stats = body["artistStats"].as_array().unwrap();
        assert!(
            artist_stats.contains(&json!({"artist": "A", "songCount": 2, "albumCount": 2}))
        );
        assert!(
            artist_stats.contains(&json!({"artist": "B", "songCount": 1, "albumCount": 1}))
        );
        Ok(())
    }

    #[tokio::test]
    async fn health_check_responds_ok() -> Result<()> {
        let app = test_app().await?;

        let response = app.oneshot(empty_request("GET", "/health")).await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await?;
        assert_eq!(body["status"], json!("healthy"));
        Ok(())
    }
}
