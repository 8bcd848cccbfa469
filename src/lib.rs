//! espotifai Library
//!
//! A facade over the Spotify Web API covering authentication, track search
//! and locally stored playlists. Every operation reports its outcome through
//! a caller supplied listener instead of a return value.
//!
//! # Modules
//!
//! - `api` - The [`Api`] facade and the listener traits
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - The [`ApiError`] taxonomy
//! - `logging` - `tracing` subscriber setup
//! - `management` - Local playlist store and token cache
//! - `ports` - Collaborator traits consumed by the facade
//! - `spotify` - Spotify Web API collaborators
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use espotifai::{Api, Capture, PlaylistOutcome, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> espotifai::Res<()> {
//!     let api = Api::from_config(&Config::from_env()?);
//!     let mut listener: Capture<PlaylistOutcome> = Capture::new();
//!     api.get_playlists(&mut listener).await;
//!     println!("{:?}", listener.into_result()?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod management;
pub mod ports;
pub mod spotify;
pub mod types;
pub mod utils;

pub use api::{
    AccessListener, AddMusicToPlaylistListener, Api, Capture, Completion, PlaylistListener,
    PlaylistOutcome, SearchMusicListener,
};
pub use error::{ApiError, ErrorKind};
pub use types::{MusicInfo, PlaylistRef, Token};

/// A convenient Result type alias for top-level plumbing.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross async task boundaries.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching for {}", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist {} created", name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors in the command line front end; library code reports
/// failures through listeners.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Could not cache token: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
