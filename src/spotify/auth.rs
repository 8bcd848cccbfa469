use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};

use crate::{
    error::ApiError,
    ports::Authenticator,
    types::{Token, TokenResponse},
};

/// Obtains app tokens through the OAuth 2.0 client credentials grant.
#[derive(Debug, Clone)]
pub struct ClientCredentialsAuthenticator {
    client: Client,
    token_url: String,
}

impl ClientCredentialsAuthenticator {
    pub fn new(client: Client, token_url: String) -> Self {
        Self { client, token_url }
    }
}

#[async_trait]
impl Authenticator for ClientCredentialsAuthenticator {
    /// Exchanges the client id and secret for an access token.
    ///
    /// The credentials are sent as HTTP basic auth together with
    /// `grant_type=client_credentials`. Spotify answers a bad id or secret
    /// with `400 invalid_client`, which is reported as
    /// [`ApiError::Unauthorized`] just like a 401.
    async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Token, ApiError> {
        tracing::debug!(url = %self.token_url, "requesting client credentials token");

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                    ApiError::Unauthorized(format!("{status}: {}", body.trim()))
                }
                _ => ApiError::from_status(status, &body),
            });
        }

        let json = response.json::<TokenResponse>().await?;
        if json.access_token.is_empty() {
            return Err(ApiError::RemoteFailure(
                "token endpoint returned an empty access token".to_string(),
            ));
        }

        tracing::info!(expires_in = json.expires_in, "access token obtained");
        Ok(Token {
            access_token: json.access_token,
            token_type: json.token_type,
            expires_in: json.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}
