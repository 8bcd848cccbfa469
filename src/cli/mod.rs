//! # CLI Module
//!
//! Command implementations for the `espotifai` binary. Each command drives
//! one facade operation and renders the listener's outcome for a terminal:
//! tables for results, colored status lines for everything else.
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Api facade (listeners)
//!     ↓
//! Spotify collaborators / playlist store
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! espotifai auth                                  # Obtain and cache a token
//! espotifai search "Imagine"                      # Search tracks
//! espotifai playlist create "Road Trip" --owner alice
//! espotifai playlist add "Road Trip" --name "Imagine" --artist "John Lennon"
//! espotifai playlist show "Road Trip"
//! espotifai playlist list
//! ```

mod auth;
mod playlist;
mod search;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use auth::auth;
pub use playlist::{add_to_playlist, create_playlist, list_playlists, show_playlist};
pub use search::search;

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
