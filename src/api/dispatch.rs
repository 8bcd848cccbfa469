use std::{future::Future, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;

use crate::{
    api::listener::{
        AccessListener, AddMusicToPlaylistListener, PlaylistListener, PlaylistOutcome,
        SearchMusicListener,
    },
    error::ApiError,
    ports::{Authenticator, PlaylistManager, Searcher},
    types::{MusicInfo, PlaylistRef, Token},
    utils,
};

/// Routes facade calls to the collaborators and their outcomes to listeners.
///
/// Arguments are validated before any collaborator is touched. Whatever the
/// collaborator does, including panicking, ends in exactly one listener
/// notification.
pub(crate) struct Dispatcher {
    auth: Arc<dyn Authenticator>,
    searcher: Arc<dyn Searcher>,
    playlists: Arc<dyn PlaylistManager>,
}

impl Dispatcher {
    pub(crate) fn new(
        auth: Arc<dyn Authenticator>,
        searcher: Arc<dyn Searcher>,
        playlists: Arc<dyn PlaylistManager>,
    ) -> Self {
        Self {
            auth,
            searcher,
            playlists,
        }
    }

    pub(crate) async fn request_access<L>(
        &self,
        listener: &mut L,
        client_id: &str,
        client_secret: &str,
    ) where
        L: AccessListener + ?Sized,
    {
        match settle("request_access", self.authenticate(client_id, client_secret).await) {
            Ok(token) => listener.on_success(token),
            Err(e) => listener.on_failure(e),
        }
    }

    pub(crate) async fn search_music<L>(&self, listener: &mut L, token: &str, name: &str)
    where
        L: SearchMusicListener + ?Sized,
    {
        match settle("search_music", self.search(token, name).await) {
            Ok(musics) => listener.on_success(musics),
            Err(e) => listener.on_failure(e),
        }
    }

    pub(crate) async fn create_playlist<L>(&self, listener: &mut L, name: &str, owner: &str)
    where
        L: PlaylistListener + ?Sized,
    {
        match settle("create_playlist", self.create(name, owner).await) {
            Ok(playlist) => listener.on_success(PlaylistOutcome::Created(playlist)),
            Err(e) => listener.on_failure(e),
        }
    }

    pub(crate) async fn add_music_to_playlist<L>(
        &self,
        listener: &mut L,
        music: &MusicInfo,
        playlist: &str,
    ) where
        L: AddMusicToPlaylistListener + ?Sized,
    {
        match settle("add_music_to_playlist", self.add(music, playlist).await) {
            Ok(()) => listener.on_success(),
            Err(e) => listener.on_failure(e),
        }
    }

    pub(crate) async fn list_playlist_musics<L>(&self, listener: &mut L, playlist: &str)
    where
        L: PlaylistListener + ?Sized,
    {
        match settle("list_playlist_musics", self.list_tracks(playlist).await) {
            Ok(musics) => listener.on_success(PlaylistOutcome::Musics(musics)),
            Err(e) => listener.on_failure(e),
        }
    }

    pub(crate) async fn get_playlists<L>(&self, listener: &mut L)
    where
        L: PlaylistListener + ?Sized,
    {
        let outcome = guarded(|| self.playlists.list_playlists()).await;
        match settle("get_playlists", outcome) {
            Ok(playlists) => listener.on_success(PlaylistOutcome::Playlists(playlists)),
            Err(e) => listener.on_failure(e),
        }
    }

    async fn authenticate(&self, client_id: &str, client_secret: &str) -> Result<Token, ApiError> {
        utils::require_non_empty("client_id", client_id)?;
        utils::require_non_empty("client_secret", client_secret)?;
        guarded(|| self.auth.authenticate(client_id, client_secret)).await
    }

    async fn search(&self, token: &str, name: &str) -> Result<Vec<MusicInfo>, ApiError> {
        utils::require_non_empty("token", token)?;
        utils::require_non_empty("music name", name)?;
        guarded(|| self.searcher.search(token, name)).await
    }

    async fn create(&self, name: &str, owner: &str) -> Result<PlaylistRef, ApiError> {
        utils::require_non_empty("playlist name", name)?;
        utils::require_non_empty("playlist owner", owner)?;
        guarded(|| self.playlists.create(name, owner)).await
    }

    async fn add(&self, music: &MusicInfo, playlist: &str) -> Result<(), ApiError> {
        utils::require_non_empty("playlist name", playlist)?;
        utils::validate_music(music)?;
        guarded(|| self.playlists.add_track(playlist, music)).await
    }

    async fn list_tracks(&self, playlist: &str) -> Result<Vec<MusicInfo>, ApiError> {
        utils::require_non_empty("playlist name", playlist)?;
        guarded(|| self.playlists.list_tracks(playlist)).await
    }
}

/// Runs a collaborator call, turning a panic into [`ApiError::Internal`].
///
/// The call is made inside the guarded future so a collaborator panicking
/// before it yields a future is caught as well.
async fn guarded<T, F, Fut>(call: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    match AssertUnwindSafe(async move { call().await })
        .catch_unwind()
        .await
    {
        Ok(outcome) => outcome,
        Err(payload) => Err(ApiError::Internal(format!(
            "collaborator panicked: {}",
            utils::panic_message(payload.as_ref())
        ))),
    }
}

fn settle<T>(operation: &'static str, outcome: Result<T, ApiError>) -> Result<T, ApiError> {
    match &outcome {
        Ok(_) => tracing::debug!(operation, "operation succeeded"),
        Err(e) => tracing::warn!(operation, kind = ?e.kind(), error = %e, "operation failed"),
    }
    outcome
}
