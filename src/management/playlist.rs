use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    error::ApiError,
    ports::PlaylistManager,
    types::{MusicInfo, Playlist, PlaylistRef},
};

/// Playlist store backed by a single JSON file.
///
/// The file is read lazily on first use and every mutation is written
/// through before the call returns. A missing file is an empty store.
pub struct JsonPlaylistStore {
    path: PathBuf,
    playlists: Mutex<Option<Vec<Playlist>>>,
}

impl JsonPlaylistStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            playlists: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn loaded(&self) -> Result<MutexGuard<'_, Option<Vec<Playlist>>>, ApiError> {
        let mut guard = self.playlists.lock().await;
        if guard.is_none() {
            *guard = Some(Self::load(&self.path).await?);
        }
        Ok(guard)
    }

    async fn load(path: &Path) -> Result<Vec<Playlist>, ApiError> {
        match async_fs::read_to_string(path).await {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => {
                let playlists: Vec<Playlist> = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), count = playlists.len(), "playlists loaded");
                Ok(playlists)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, playlists: &[Playlist]) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(playlists)?;
        async_fs::write(&self.path, json).await?;
        tracing::debug!(path = %self.path.display(), "playlists persisted");
        Ok(())
    }
}

#[async_trait]
impl PlaylistManager for JsonPlaylistStore {
    async fn create(&self, name: &str, owner: &str) -> Result<PlaylistRef, ApiError> {
        let mut guard = self.loaded().await?;
        let playlists = guard.get_or_insert_with(Vec::new);

        if playlists.iter().any(|p| p.name == name) {
            return Err(ApiError::Duplicate(format!(
                "playlist '{name}' already exists"
            )));
        }

        let playlist = Playlist::new(name.to_string(), owner.to_string());
        let created = playlist.to_ref();
        playlists.push(playlist);

        if let Err(e) = self.persist(playlists.as_slice()).await {
            playlists.pop();
            return Err(e);
        }

        tracing::info!(playlist = name, owner, "playlist created");
        Ok(created)
    }

    async fn add_track(&self, playlist: &str, music: &MusicInfo) -> Result<(), ApiError> {
        let mut guard = self.loaded().await?;
        let playlists = guard.get_or_insert_with(Vec::new);

        let Some(index) = playlists.iter().position(|p| p.name == playlist) else {
            return Err(ApiError::NotFound(format!(
                "playlist '{playlist}' does not exist"
            )));
        };

        if playlists[index].tracks.contains(music) {
            return Err(ApiError::Duplicate(format!(
                "'{}' is already in playlist '{playlist}'",
                music.name()
            )));
        }

        playlists[index].tracks.push(music.clone());

        if let Err(e) = self.persist(playlists.as_slice()).await {
            playlists[index].tracks.pop();
            return Err(e);
        }

        tracing::info!(playlist, track = music.name(), "track added");
        Ok(())
    }

    async fn list_tracks(&self, playlist: &str) -> Result<Vec<MusicInfo>, ApiError> {
        let mut guard = self.loaded().await?;
        let playlists = guard.get_or_insert_with(Vec::new);

        playlists
            .iter()
            .find(|p| p.name == playlist)
            .map(|p| p.tracks.clone())
            .ok_or_else(|| ApiError::NotFound(format!("playlist '{playlist}' does not exist")))
    }

    async fn list_playlists(&self) -> Result<Vec<PlaylistRef>, ApiError> {
        let mut guard = self.loaded().await?;
        let playlists = guard.get_or_insert_with(Vec::new);

        let mut refs: Vec<PlaylistRef> = playlists.iter().map(Playlist::to_ref).collect();
        refs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(refs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind as ApiErrorKind;

    fn store(dir: &tempfile::TempDir) -> JsonPlaylistStore {
        JsonPlaylistStore::new(dir.path().join("nested/playlists.json"))
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        assert!(store.list_playlists().await.unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_create_persists_and_rejects_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let created = store.create("Road Trip", "alice").await.unwrap();
        assert_eq!(created.name, "Road Trip");
        assert_eq!(created.owner, "alice");
        assert!(store.path().exists());

        let err = store.create("Road Trip", "bob").await.unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Duplicate);
        assert_eq!(store.list_playlists().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_track_to_missing_playlist() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let err = store
            .add_track("NoSuchList", &MusicInfo::new("Song A", "X"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::NotFound);
        assert!(store.list_playlists().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tracks_keep_insertion_order_and_reject_repeats() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.create("Focus", "bob").await.unwrap();

        let first = MusicInfo::new("Song B", "Y").with_id("b");
        let second = MusicInfo::new("Song A", "X").with_id("a");
        store.add_track("Focus", &first).await.unwrap();
        store.add_track("Focus", &second).await.unwrap();

        let err = store.add_track("Focus", &first).await.unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Duplicate);

        let tracks = store.list_tracks("Focus").await.unwrap();
        assert_eq!(tracks, vec![first, second]);
    }

    #[tokio::test]
    async fn test_reload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = store(&dir);
            store.create("Zen", "carol").await.unwrap();
            store.create("Acid", "dave").await.unwrap();
            store
                .add_track("Zen", &MusicInfo::new("Om", "Monks"))
                .await
                .unwrap();
        }

        let reopened = store(&dir);
        let names: Vec<String> = reopened
            .list_playlists()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Acid", "Zen"]);
        assert_eq!(reopened.list_tracks("Zen").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlists.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonPlaylistStore::new(path);
        let err = store.list_playlists().await.unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Storage);
    }
}
