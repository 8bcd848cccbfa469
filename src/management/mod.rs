mod auth;
mod playlist;

pub use auth::TokenCache;
pub use auth::is_expired;
pub use playlist::JsonPlaylistStore;
