use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT},
    error::ApiError,
    ports::Searcher,
    spotify::error_from_response,
    types::{MusicInfo, SearchResponse},
    utils,
};

const MAX_ATTEMPTS: u32 = 3;

/// Track search against `GET /search?type=track`.
#[derive(Debug, Clone)]
pub struct SpotifySearcher {
    client: Client,
    api_url: String,
    limit: u32,
    retry_delay: Duration,
}

impl SpotifySearcher {
    pub fn new(client: Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            limit: DEFAULT_SEARCH_LIMIT,
            retry_delay: Duration::from_secs(10),
        }
    }

    /// Number of tracks requested per search, clamped to 1..=50.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, MAX_SEARCH_LIMIT);
        self
    }

    /// Delay between attempts after a `502 Bad Gateway`.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }
}

#[async_trait]
impl Searcher for SpotifySearcher {
    async fn search(&self, token: &str, query: &str) -> Result<Vec<MusicInfo>, ApiError> {
        let api_url = format!("{uri}/search", uri = self.api_url);
        let limit = self.limit.to_string();
        let mut attempt = 0;

        loop {
            attempt += 1;
            tracing::debug!(query, attempt, "searching tracks");

            let response = self
                .client
                .get(&api_url)
                .bearer_auth(token)
                .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
                .send()
                .await?;

            match response.status() {
                status if status.is_success() => {
                    let res = response.json::<SearchResponse>().await?;
                    return Ok(res.tracks.items.into_iter().map(MusicInfo::from).collect());
                }
                StatusCode::BAD_GATEWAY if attempt < MAX_ATTEMPTS => {
                    tracing::warn!(attempt, "bad gateway from search endpoint, retrying");
                    sleep(self.retry_delay).await;
                }
                StatusCode::TOO_MANY_REQUESTS if attempt < MAX_ATTEMPTS => {
                    match utils::parse_retry_after(response.headers()) {
                        Some(secs) if secs <= utils::MAX_RETRY_AFTER_SECS => {
                            tracing::warn!(retry_after = secs, "rate limited, waiting");
                            sleep(Duration::from_secs(secs)).await;
                        }
                        Some(secs) => {
                            return Err(ApiError::RemoteFailure(format!(
                                "rate limited for {secs} seconds"
                            )));
                        }
                        None => return Err(error_from_response(response).await),
                    }
                }
                _ => return Err(error_from_response(response).await),
            }
        }
    }
}
