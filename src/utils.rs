use std::any::Any;

use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::{
    error::ApiError,
    types::{MusicInfo, MusicTableRow, PlaylistRef, PlaylistTableRow},
};

/// Longest `Retry-After` we are willing to sleep through, in seconds.
pub const MAX_RETRY_AFTER_SECS: u64 = 120;

pub fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidArgument(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

pub fn validate_music(music: &MusicInfo) -> Result<(), ApiError> {
    require_non_empty("music name", music.name())
}

/// Reads the `Retry-After` header as whole seconds.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

/// Best effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

pub fn format_duration(duration_ms: u64) -> String {
    if duration_ms == 0 {
        return "-".to_string();
    }
    let secs = duration_ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn music_table_rows(musics: &[MusicInfo]) -> Vec<MusicTableRow> {
    musics
        .iter()
        .map(|m| MusicTableRow {
            name: m.name().to_string(),
            artist: m.artist().to_string(),
            album: m.album().to_string(),
            length: format_duration(m.duration_ms()),
            id: m.id().to_string(),
        })
        .collect()
}

pub fn playlist_table_rows(playlists: &[PlaylistRef]) -> Vec<PlaylistTableRow> {
    playlists
        .iter()
        .map(|p| PlaylistTableRow {
            name: p.name.clone(),
            owner: p.owner.clone(),
            created: p.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect()
}
