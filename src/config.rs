//! Configuration management for espotifai.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults (where applicable)

use std::{
    env,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;
pub const MAX_SEARCH_LIMIT: u32 = 50;

const APP_DIR: &str = "espotifai";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to prepare data directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load {path}: {reason}")]
    EnvFile { path: PathBuf, reason: String },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Runtime settings for the Spotify collaborators and the playlist store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub token_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub playlist_store: PathBuf,
    pub search_limit: u32,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `ESPOTIFAI_SEARCH_LIMIT` is
    /// not a number between 1 and 50.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let search_limit = match non_empty("ESPOTIFAI_SEARCH_LIMIT") {
            Some(raw) => parse_search_limit(&raw)?,
            None => DEFAULT_SEARCH_LIMIT,
        };

        Ok(Self {
            api_url: non_empty("SPOTIFY_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            token_url: non_empty("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            client_id: non_empty("SPOTIFY_API_AUTH_CLIENT_ID"),
            client_secret: non_empty("SPOTIFY_API_AUTH_CLIENT_SECRET"),
            playlist_store: non_empty("ESPOTIFAI_PLAYLIST_STORE")
                .map(PathBuf::from)
                .unwrap_or_else(default_playlist_store),
            search_limit,
        })
    }
}

fn parse_search_limit(raw: &str) -> Result<u32, ConfigError> {
    let limit = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidValue {
            name: "ESPOTIFAI_SEARCH_LIMIT",
            reason: e.to_string(),
        })?;

    if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
        return Err(ConfigError::InvalidValue {
            name: "ESPOTIFAI_SEARCH_LIMIT",
            reason: format!("{limit} is outside 1..={MAX_SEARCH_LIMIT}"),
        });
    }
    Ok(limit)
}

/// Platform local data directory for espotifai.
///
/// - Linux: `~/.local/share/espotifai`
/// - macOS: `~/Library/Application Support/espotifai`
/// - Windows: `%LOCALAPPDATA%/espotifai`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

pub fn default_playlist_store() -> PathBuf {
    data_dir().join("playlists.json")
}

/// Loads environment variables from `<data dir>/espotifai/.env`.
///
/// Creates the data directory if needed. A missing `.env` file is not an
/// error; variables already set in the environment are left untouched.
pub async fn load_env() -> Result<(), ConfigError> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;
    load_env_file(&dir.join(".env"))
}

fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no .env file, using process environment");
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| ConfigError::EnvFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.search_limit, DEFAULT_SEARCH_LIMIT);
        assert!(config.client_id.is_none());
        assert!(config.playlist_store.ends_with("espotifai/playlists.json"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SPOTIFY_API_URL", "http://127.0.0.1:9000/v1/"),
            ("SPOTIFY_API_AUTH_CLIENT_ID", "abc"),
            ("SPOTIFY_API_AUTH_CLIENT_SECRET", "  "),
            ("ESPOTIFAI_PLAYLIST_STORE", "/tmp/lists.json"),
            ("ESPOTIFAI_SEARCH_LIMIT", "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.client_id.as_deref(), Some("abc"));
        assert!(config.client_secret.is_none());
        assert_eq!(config.playlist_store, PathBuf::from("/tmp/lists.json"));
        assert_eq!(config.search_limit, 5);
    }

    #[test]
    fn test_invalid_search_limit() {
        for raw in ["0", "51", "many"] {
            let err = Config::from_lookup(lookup(&[("ESPOTIFAI_SEARCH_LIMIT", raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        }
    }

    #[test]
    fn test_missing_env_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_file(&dir.path().join(".env")).is_ok());
    }
}
