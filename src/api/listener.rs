//! Outcome listeners.
//!
//! Every facade operation reports its result through exactly one call to
//! `on_success` or `on_failure` on the listener passed in. A listener is
//! meant for a single call; nothing is retained between calls.

use tokio::sync::oneshot;

use crate::{
    error::ApiError,
    types::{MusicInfo, PlaylistRef, Token},
};

/// Receives the outcome of [`Api::request_access`](crate::api::Api::request_access).
pub trait AccessListener {
    fn on_success(&mut self, token: Token);
    fn on_failure(&mut self, error: ApiError);
}

/// Receives the outcome of [`Api::search_music`](crate::api::Api::search_music).
pub trait SearchMusicListener {
    fn on_success(&mut self, musics: Vec<MusicInfo>);
    fn on_failure(&mut self, error: ApiError);
}

/// Success payload of the playlist operations sharing [`PlaylistListener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistOutcome {
    /// `create_playlist`
    Created(PlaylistRef),
    /// `list_playlist_musics`
    Musics(Vec<MusicInfo>),
    /// `get_playlists`
    Playlists(Vec<PlaylistRef>),
}

/// Receives the outcome of `create_playlist`, `list_playlist_musics` and
/// `get_playlists`.
pub trait PlaylistListener {
    fn on_success(&mut self, outcome: PlaylistOutcome);
    fn on_failure(&mut self, error: ApiError);
}

/// Receives the outcome of
/// [`Api::add_music_to_playlist`](crate::api::Api::add_music_to_playlist).
pub trait AddMusicToPlaylistListener {
    fn on_success(&mut self);
    fn on_failure(&mut self, error: ApiError);
}

/// A listener that simply records what it was told.
///
/// Implements every listener trait for the matching payload type, so the
/// same type serves `Capture<Token>`, `Capture<Vec<MusicInfo>>`,
/// `Capture<PlaylistOutcome>` and `Capture<()>`.
#[derive(Debug)]
pub struct Capture<T> {
    outcome: Option<Result<T, ApiError>>,
    successes: usize,
    failures: usize,
}

impl<T> Default for Capture<T> {
    fn default() -> Self {
        Self {
            outcome: None,
            successes: 0,
            failures: 0,
        }
    }
}

impl<T> Capture<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of notifications received.
    pub fn notifications(&self) -> usize {
        self.successes + self.failures
    }

    pub fn successes(&self) -> usize {
        self.successes
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn outcome(&self) -> Option<&Result<T, ApiError>> {
        self.outcome.as_ref()
    }

    /// Consumes the capture, yielding the recorded outcome.
    pub fn into_result(self) -> Result<T, ApiError> {
        self.outcome.unwrap_or_else(|| {
            Err(ApiError::Internal(
                "listener was never notified".to_string(),
            ))
        })
    }

    fn succeed(&mut self, value: T) {
        self.successes += 1;
        self.outcome = Some(Ok(value));
    }

    fn fail(&mut self, error: ApiError) {
        self.failures += 1;
        self.outcome = Some(Err(error));
    }
}

impl AccessListener for Capture<Token> {
    fn on_success(&mut self, token: Token) {
        self.succeed(token);
    }

    fn on_failure(&mut self, error: ApiError) {
        self.fail(error);
    }
}

impl SearchMusicListener for Capture<Vec<MusicInfo>> {
    fn on_success(&mut self, musics: Vec<MusicInfo>) {
        self.succeed(musics);
    }

    fn on_failure(&mut self, error: ApiError) {
        self.fail(error);
    }
}

impl PlaylistListener for Capture<PlaylistOutcome> {
    fn on_success(&mut self, outcome: PlaylistOutcome) {
        self.succeed(outcome);
    }

    fn on_failure(&mut self, error: ApiError) {
        self.fail(error);
    }
}

impl AddMusicToPlaylistListener for Capture<()> {
    fn on_success(&mut self) {
        self.succeed(());
    }

    fn on_failure(&mut self, error: ApiError) {
        self.fail(error);
    }
}

/// A listener forwarding its outcome through a oneshot channel, for callers
/// that want to await the result from another task.
#[derive(Debug)]
pub struct Completion<T> {
    sender: Option<oneshot::Sender<Result<T, ApiError>>>,
}

impl<T> Completion<T> {
    pub fn channel() -> (Self, oneshot::Receiver<Result<T, ApiError>>) {
        let (tx, rx) = oneshot::channel();
        (Self { sender: Some(tx) }, rx)
    }

    fn complete(&mut self, outcome: Result<T, ApiError>) {
        // receiver may already be gone; nothing left to tell then
        if let Some(tx) = self.sender.take() {
            let _ = tx.send(outcome);
        }
    }
}

impl AccessListener for Completion<Token> {
    fn on_success(&mut self, token: Token) {
        self.complete(Ok(token));
    }

    fn on_failure(&mut self, error: ApiError) {
        self.complete(Err(error));
    }
}

impl SearchMusicListener for Completion<Vec<MusicInfo>> {
    fn on_success(&mut self, musics: Vec<MusicInfo>) {
        self.complete(Ok(musics));
    }

    fn on_failure(&mut self, error: ApiError) {
        self.complete(Err(error));
    }
}

impl PlaylistListener for Completion<PlaylistOutcome> {
    fn on_success(&mut self, outcome: PlaylistOutcome) {
        self.complete(Ok(outcome));
    }

    fn on_failure(&mut self, error: ApiError) {
        self.complete(Err(error));
    }
}

impl AddMusicToPlaylistListener for Completion<()> {
    fn on_success(&mut self) {
        self.complete(Ok(()));
    }

    fn on_failure(&mut self, error: ApiError) {
        self.complete(Err(error));
    }
}
