//! # Spotify Integration Module
//!
//! Concrete collaborators talking to the Spotify Web API over `reqwest`.
//!
//! ```text
//! Api (facade)
//!      ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     └── Track search
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Error mapping
//!
//! - 401/403 responses become [`ApiError::Unauthorized`](crate::error::ApiError::Unauthorized)
//! - everything else that is not a success becomes
//!   [`ApiError::RemoteFailure`](crate::error::ApiError::RemoteFailure)
//!
//! ## Retries
//!
//! The searcher retries `502 Bad Gateway` a bounded number of times and
//! honours `Retry-After` on `429 Too Many Requests` when the requested delay
//! is at most two minutes. The authenticator never retries.

pub mod auth;
pub mod search;

pub use auth::ClientCredentialsAuthenticator;
pub use search::SpotifySearcher;

use reqwest::Response;

use crate::error::ApiError;

/// Turns a non-success response into an [`ApiError`], keeping the body text.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}
