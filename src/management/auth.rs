use std::path::PathBuf;

use chrono::Utc;

use crate::{config, error::ApiError, types::Token};

/// Seconds before the real expiry at which a cached token counts as stale.
const EXPIRY_MARGIN_SECS: u64 = 60;

/// Keeps the last token handed out to the command line between runs.
pub struct TokenCache {
    path: PathBuf,
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new(Self::token_path())
    }
}

impl TokenCache {
    pub fn new(path: PathBuf) -> Self {
        TokenCache { path }
    }

    pub async fn load(&self) -> Result<Token, ApiError> {
        let content = async_fs::read_to_string(&self.path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(token)
    }

    pub async fn persist(&self, token: &Token) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Loads the cached token unless it is missing or about to expire.
    pub async fn valid_token(&self) -> Option<Token> {
        match self.load().await {
            Ok(token) if !is_expired(&token) => Some(token),
            Ok(_) => {
                tracing::debug!("cached token expired");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "no usable cached token");
                None
            }
        }
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }
}

pub fn is_expired(token: &Token) -> bool {
    let now = Utc::now().timestamp() as u64;
    now + EXPIRY_MARGIN_SECS >= token.obtained_at + token.expires_in
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(obtained_at: u64, expires_in: u64) -> Token {
        Token {
            access_token: "BQC".to_string(),
            token_type: "Bearer".to_string(),
            expires_in,
            obtained_at,
        }
    }

    #[test]
    fn test_is_expired() {
        let now = Utc::now().timestamp() as u64;
        assert!(!is_expired(&token(now, 3600)));
        assert!(is_expired(&token(now, 30)));
        assert!(is_expired(&token(now - 7200, 3600)));
    }

    #[tokio::test]
    async fn test_persist_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("cache/token.json"));
        let now = Utc::now().timestamp() as u64;

        assert!(cache.valid_token().await.is_none());

        cache.persist(&token(now, 3600)).await.unwrap();
        assert_eq!(cache.valid_token().await, Some(token(now, 3600)));

        cache.persist(&token(now - 7200, 3600)).await.unwrap();
        assert!(cache.valid_token().await.is_none());
    }
}
