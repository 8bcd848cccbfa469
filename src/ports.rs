//! Collaborator contracts consumed by the facade.
//!
//! Production implementations live in [`crate::spotify`] and
//! [`crate::management`]; tests substitute mocks or fakes.

use async_trait::async_trait;

use crate::{
    error::ApiError,
    types::{MusicInfo, PlaylistRef, Token},
};

/// Exchanges client credentials for an access token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, client_id: &str, client_secret: &str)
    -> Result<Token, ApiError>;
}

/// Looks tracks up on the remote platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Searcher: Send + Sync {
    async fn search(&self, token: &str, query: &str) -> Result<Vec<MusicInfo>, ApiError>;
}

/// Owns playlists and their track membership.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaylistManager: Send + Sync {
    /// Fails with [`ApiError::Duplicate`] when the name is taken.
    async fn create(&self, name: &str, owner: &str) -> Result<PlaylistRef, ApiError>;

    /// Fails with [`ApiError::NotFound`] when the playlist does not exist.
    async fn add_track(&self, playlist: &str, music: &MusicInfo) -> Result<(), ApiError>;

    async fn list_tracks(&self, playlist: &str) -> Result<Vec<MusicInfo>, ApiError>;

    async fn list_playlists(&self) -> Result<Vec<PlaylistRef>, ApiError>;
}
