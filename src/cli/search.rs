use indicatif::ProgressBar;
use tabled::Table;

use crate::{
    api::{Api, SearchMusicListener},
    cli::spinner,
    error,
    error::ApiError,
    management::TokenCache,
    types::MusicInfo,
    utils, warning,
};

/// Prints search results as a table once the spinner is cleared.
struct SearchPrinter {
    query: String,
    pb: ProgressBar,
}

impl SearchMusicListener for SearchPrinter {
    fn on_success(&mut self, musics: Vec<MusicInfo>) {
        self.pb.finish_and_clear();
        if musics.is_empty() {
            warning!("No tracks found for '{}'", self.query);
            return;
        }

        println!("{}", Table::new(utils::music_table_rows(&musics)));
    }

    fn on_failure(&mut self, error: ApiError) {
        self.pb.finish_and_clear();
        error!("Search for '{}' failed: {}", self.query, error);
    }
}

pub async fn search(api: &Api, query: &str, token: Option<String>) {
    let token = match token {
        Some(t) => t,
        None => match TokenCache::default().valid_token().await {
            Some(t) => t.access_token,
            None => error!("No valid token found. Please run espotifai auth"),
        },
    };

    let mut printer = SearchPrinter {
        query: query.to_string(),
        pb: spinner("Searching tracks..."),
    };
    api.search_music(&mut printer, &token, query).await;
}
