use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Description of a single track.
///
/// Built by the searcher when parsing a query response, or by a caller that
/// wants to add a track to a playlist. Fields are read-only after
/// construction; two values with equal fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MusicInfo {
    name: String,
    artist: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    uri: String,
    #[serde(default)]
    album: String,
    #[serde(default)]
    duration_ms: u64,
}

impl MusicInfo {
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            id: String::new(),
            uri: String::new(),
            album: String::new(),
            duration_ms: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Spotify track id, empty for hand-made entries.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

/// Access token issued by the authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.access_token
    }
}

/// Lightweight view of a playlist handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub name: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

/// A playlist as kept by the playlist store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tracks: Vec<MusicInfo>,
}

impl Playlist {
    pub fn new(name: String, owner: String) -> Self {
        Self {
            name,
            owner,
            created_at: Utc::now(),
            tracks: Vec::new(),
        }
    }

    pub fn to_ref(&self) -> PlaylistRef {
        PlaylistRef {
            name: self.name.clone(),
            owner: self.owner.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<TrackObject>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub duration_ms: u64,
    pub artists: Vec<TrackArtist>,
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub id: Option<String>,
    pub name: String,
}

impl From<TrackObject> for MusicInfo {
    fn from(track: TrackObject) -> Self {
        let artist = track
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        MusicInfo::new(track.name, artist)
            .with_id(track.id)
            .with_uri(track.uri)
            .with_album(track.album.map(|a| a.name).unwrap_or_default())
            .with_duration_ms(track.duration_ms)
    }
}

#[derive(Tabled)]
pub struct MusicTableRow {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub length: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub owner: String,
    pub created: String,
}
