use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use tracing::debug;

use crate::error::GatewayError;
use crate::models::song::{
    ArtistBreakdown, GenreCount, LibraryStats, Song, SongDraft, TABLE_NAME,
};
use crate::secrets::SECRET_MANAGER;

const FILTER_BY_GENRE_QUERY: &str =
    "SELECT * FROM song WHERE genre != NONE AND string::contains(string::lowercase(genre), $needle)";
const TOTAL_SONGS_QUERY: &str = "SELECT count() AS total FROM song GROUP ALL";
const TOTAL_ALBUMS_QUERY: &str =
    "SELECT array::len(albums) AS total FROM (SELECT array::distinct(album) AS albums FROM song GROUP ALL)";
const GENRE_STATS_QUERY: &str = "SELECT genre, count() AS count FROM song GROUP BY genre";
const ARTIST_STATS_QUERY: &str =
    "SELECT artist, songCount, array::len(albums) AS albumCount FROM (SELECT artist, count() AS songCount, array::distinct(album) AS albums FROM song GROUP BY artist)";

#[derive(serde::Deserialize)]
struct TotalRow {
    total: usize,
}

/// Handle on the song store. Cheap to clone; every request shares the one
/// underlying connection and the store handles all concurrency control.
#[derive(Clone)]
pub struct Database {
    conn: Surreal<Any>,
}

impl Database {
    /// Connect using the configured endpoint. The namespace and database are
    /// selected before this returns, so the service never accepts requests
    /// ahead of a confirmed store connection.
    pub async fn new() -> Result<Self, surrealdb::Error> {
        let uri = SECRET_MANAGER.get("DB_URI");
        debug!("DB_URI={}", uri);
        Self::connect(&uri).await
    }

    pub async fn connect(uri: &str) -> Result<Self, surrealdb::Error> {
        let conn = connect(uri).await?;
        conn.use_ns(SECRET_MANAGER.get("DB_NAMESPACE")).await?;
        conn.use_db(SECRET_MANAGER.get("DB_NAME")).await?;
        Ok(Self { conn })
    }

    /// Bulk insert; one draft still goes through the same path. Returns the
    /// created records, each carrying its store-assigned id.
    pub async fn insert_songs(&self, drafts: Vec<SongDraft>) -> Result<Vec<Song>, GatewayError> {
        let created: Vec<Song> = self
            .conn
            .insert(TABLE_NAME)
            .content(drafts)
            .await
            .map_err(GatewayError::ValidationFailed)?;
        Ok(created)
    }

    /// All records, or those whose genre contains the given text
    /// (case-insensitive). Order is the store's natural retrieval order.
    pub async fn list_songs(&self, genre: Option<&str>) -> Result<Vec<Song>, GatewayError> {
        match genre {
            None => self
                .conn
                .select(TABLE_NAME)
                .await
                .map_err(GatewayError::StoreUnavailable),
            Some(pattern) => {
                let needle = pattern.to_lowercase();
                let mut response = self
                    .conn
                    .query(FILTER_BY_GENRE_QUERY)
                    .bind(("needle", needle))
                    .await
                    .map_err(GatewayError::StoreUnavailable)?;
                response.take(0).map_err(GatewayError::StoreUnavailable)
            }
        }
    }

    /// Replace the caller-settable fields of the record with the draft.
    /// This is a content replacement, not a merge: fields absent from the
    /// draft end up absent on the record.
    pub async fn replace_song(&self, id: &str, draft: SongDraft) -> Result<Song, GatewayError> {
        let updated: Option<Song> = self
            .conn
            .update((TABLE_NAME, id))
            .content(draft)
            .await
            .map_err(GatewayError::ValidationFailed)?;
        updated.ok_or(GatewayError::NotFound)
    }

    pub async fn delete_song(&self, id: &str) -> Result<Song, GatewayError> {
        let deleted: Option<Song> = self
            .conn
            .delete((TABLE_NAME, id))
            .await
            .map_err(GatewayError::StoreUnavailable)?;
        deleted.ok_or(GatewayError::NotFound)
    }

    /// The full aggregate report in one round trip. Distinct-value totals are
    /// the lengths of the store's grouped result sets, mirroring how a
    /// driver-side `distinct` helper would be consumed.
    pub async fn stats(&self) -> Result<LibraryStats, GatewayError> {
        let mut response = self
            .conn
            .query(TOTAL_SONGS_QUERY)
            .query(TOTAL_ALBUMS_QUERY)
            .query(GENRE_STATS_QUERY)
            .query(ARTIST_STATS_QUERY)
            .await
            .map_err(GatewayError::StoreUnavailable)?;

        let total_songs: Option<TotalRow> =
            response.take(0).map_err(GatewayError::StoreUnavailable)?;
        let total_albums: Option<TotalRow> =
            response.take(1).map_err(GatewayError::StoreUnavailable)?;
        let genre_stats: Vec<GenreCount> =
            response.take(2).map_err(GatewayError::StoreUnavailable)?;
        let artist_stats: Vec<ArtistBreakdown> =
            response.take(3).map_err(GatewayError::StoreUnavailable)?;

        Ok(LibraryStats {
            total_songs: total_songs.map_or(0, |row| row.total),
            total_albums: total_albums.map_or(0, |row| row.total),
            total_artists: artist_stats.len(),
            total_genres: genre_stats.len(),
            genre_stats,
            artist_stats,
        })
    }
}
