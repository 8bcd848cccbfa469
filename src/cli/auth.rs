use crate::{
    api::{Api, Capture},
    cli::spinner,
    error, info,
    management::TokenCache,
    success,
    types::Token,
    warning,
};

pub async fn auth(api: &Api, client_id: &str, client_secret: &str) {
    let pb = spinner("Requesting access token...");
    let mut listener: Capture<Token> = Capture::new();
    api.request_access(&mut listener, client_id, client_secret)
        .await;
    pb.finish_and_clear();

    match listener.into_result() {
        Ok(token) => {
            let cache = TokenCache::default();
            if let Err(e) = cache.persist(&token).await {
                warning!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
            info!("Token valid for {} seconds", token.expires_in);
        }
        Err(e) => error!("Authentication failed: {}", e),
    }
}
