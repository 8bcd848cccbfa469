//! # Facade
//!
//! [`Api`] is the single public entry point. Each method takes a listener
//! plus the operation's arguments, hands the work to one collaborator and
//! reports the outcome through exactly one listener notification. Nothing is
//! returned directly and nothing escapes as an unreported error.
//!
//! ```text
//! caller ──► Api ──► Dispatcher ──► Authenticator | Searcher | PlaylistManager
//!                        │
//!                        └──► listener.on_success(..) | listener.on_failure(..)
//! ```
//!
//! The facade holds no domain state. Collaborators are shared through `Arc`
//! so one set of them can back many `Api` clones and concurrent calls.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use espotifai::api::{Api, Capture};
//!
//! let api = Api::from_config(&config);
//! let mut listener = Capture::new();
//! api.request_access(&mut listener, &client_id, &client_secret).await;
//! let token = listener.into_result()?;
//! ```

mod dispatch;
mod listener;

use std::sync::Arc;

pub use listener::{
    AccessListener, AddMusicToPlaylistListener, Capture, Completion, PlaylistListener,
    PlaylistOutcome, SearchMusicListener,
};

use crate::{
    config::Config,
    management::JsonPlaylistStore,
    ports::{Authenticator, PlaylistManager, Searcher},
    spotify::{ClientCredentialsAuthenticator, SpotifySearcher},
    types::MusicInfo,
};
use dispatch::Dispatcher;

#[derive(Clone)]
pub struct Api {
    private: Arc<Dispatcher>,
}

impl Api {
    pub fn new(
        auth: Arc<dyn Authenticator>,
        searcher: Arc<dyn Searcher>,
        playlists: Arc<dyn PlaylistManager>,
    ) -> Self {
        Self {
            private: Arc::new(Dispatcher::new(auth, searcher, playlists)),
        }
    }

    /// Wires the Spotify collaborators and the JSON playlist store.
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::new();
        let auth = ClientCredentialsAuthenticator::new(client.clone(), config.token_url.clone());
        let searcher =
            SpotifySearcher::new(client, config.api_url.clone()).with_limit(config.search_limit);
        let playlists = JsonPlaylistStore::new(config.playlist_store.clone());

        Self::new(Arc::new(auth), Arc::new(searcher), Arc::new(playlists))
    }

    /// Authenticates with the client credentials.
    pub async fn request_access<L>(&self, listener: &mut L, client_id: &str, client_secret: &str)
    where
        L: AccessListener + ?Sized,
    {
        self.private
            .request_access(listener, client_id, client_secret)
            .await
    }

    /// Searches tracks by name using a previously obtained token.
    pub async fn search_music<L>(&self, listener: &mut L, token: &str, name: &str)
    where
        L: SearchMusicListener + ?Sized,
    {
        self.private.search_music(listener, token, name).await
    }

    /// Creates a playlist; names are unique.
    pub async fn create_playlist<L>(&self, listener: &mut L, name: &str, owner: &str)
    where
        L: PlaylistListener + ?Sized,
    {
        self.private.create_playlist(listener, name, owner).await
    }

    /// Adds a track to an existing playlist.
    pub async fn add_music_to_playlist<L>(&self, listener: &mut L, music: &MusicInfo, playlist: &str)
    where
        L: AddMusicToPlaylistListener + ?Sized,
    {
        self.private
            .add_music_to_playlist(listener, music, playlist)
            .await
    }

    /// Lists the tracks of a playlist.
    pub async fn list_playlist_musics<L>(&self, listener: &mut L, playlist: &str)
    where
        L: PlaylistListener + ?Sized,
    {
        self.private.list_playlist_musics(listener, playlist).await
    }

    /// Lists every stored playlist.
    pub async fn get_playlists<L>(&self, listener: &mut L)
    where
        L: PlaylistListener + ?Sized,
    {
        self.private.get_playlists(listener).await
    }
}
