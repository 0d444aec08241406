use serde::{Deserialize, Serialize, Serializer};
use surrealdb::sql::Thing;

pub const TABLE_NAME: &str = "song";

pub type SongId = Thing;

/// A stored song record. The store assigns the id on insert; callers never
/// supply one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    #[serde(serialize_with = "serialize_record_key")]
    pub id: SongId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// Caller-supplied fields for create and update. Fields left out are omitted
/// from the stored content entirely; an update with a partial draft therefore
/// clears the missing fields rather than keeping their old values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SongDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// POST /songs accepts either a single draft or a sequence of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SongPayload {
    Many(Vec<SongDraft>),
    One(SongDraft),
}

impl SongPayload {
    pub fn into_drafts(self) -> Vec<SongDraft> {
        match self {
            Self::Many(drafts) => drafts,
            Self::One(draft) => vec![draft],
        }
    }
}

/// Record count per distinct genre value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: Option<String>,
    pub count: usize,
}

/// Per-artist record count and distinct-album count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistBreakdown {
    pub artist: Option<String>,
    pub song_count: usize,
    pub album_count: usize,
}

/// The fixed aggregate report served by GET /songs/stats, computed from the
/// full record set at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub total_songs: usize,
    pub total_artists: usize,
    pub total_albums: usize,
    pub total_genres: usize,
    pub genre_stats: Vec<GenreCount>,
    pub artist_stats: Vec<ArtistBreakdown>,
}

// Records come back from the store with a full record id, but the HTTP
// surface only ever shows the raw record key.
fn serialize_record_key<S>(id: &Thing, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&id.id.to_raw())
}
