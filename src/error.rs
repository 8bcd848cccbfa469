//! Error types shared by the facade, its collaborators and the listeners.
//!
//! Every failure a facade call can produce, whether it comes from argument
//! validation or from a collaborator, is normalised into an [`ApiError`]
//! and handed to the listener's failure method.

use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification of an [`ApiError`], handy for matching in listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Duplicate,
    RemoteFailure,
    Unauthorized,
    Storage,
    Internal,
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// A required argument was empty or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Playlist or track absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Playlist name collision or track already present
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Network or platform side error
    #[error("Remote failure: {0}")]
    RemoteFailure(String),

    /// Credentials or token rejected by the remote platform
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Local store I/O or (de)serialisation errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A collaborator failed in an unexpected way (e.g. panicked)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Duplicate(_) => ErrorKind::Duplicate,
            ApiError::RemoteFailure(_) => ErrorKind::RemoteFailure,
            ApiError::Unauthorized(_) => ErrorKind::Unauthorized,
            ApiError::Storage(_) => ErrorKind::Storage,
            ApiError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Maps a non-success HTTP status returned by the platform.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = if body.trim().is_empty() {
            status.to_string()
        } else {
            format!("{status}: {}", body.trim())
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized(detail),
            _ => ApiError::RemoteFailure(detail),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                ApiError::Unauthorized(err.to_string())
            }
            _ => ApiError::RemoteFailure(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, "").kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            ApiError::from_status(StatusCode::FORBIDDEN, "nope").kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "").kind(),
            ErrorKind::RemoteFailure
        );
    }

    #[test]
    fn test_status_detail_includes_body() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, " invalid_client ");
        assert_eq!(
            err.to_string(),
            "Remote failure: 400 Bad Request: invalid_client"
        );
    }

    #[test]
    fn test_io_error_is_storage() {
        let err: ApiError = std::io::Error::other("disk full").into();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
