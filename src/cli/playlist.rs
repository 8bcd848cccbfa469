use tabled::Table;

use crate::{
    api::{AddMusicToPlaylistListener, Api, PlaylistListener, PlaylistOutcome},
    error,
    error::ApiError,
    info, success,
    types::MusicInfo,
    utils, warning,
};

/// Renders whatever a playlist operation produced.
struct PlaylistPrinter {
    action: String,
}

impl PlaylistListener for PlaylistPrinter {
    fn on_success(&mut self, outcome: PlaylistOutcome) {
        match outcome {
            PlaylistOutcome::Created(playlist) => {
                success!("Playlist {} created for {}", playlist.name, playlist.owner)
            }
            PlaylistOutcome::Musics(musics) if musics.is_empty() => {
                info!("Playlist is empty")
            }
            PlaylistOutcome::Musics(musics) => {
                println!("{}", Table::new(utils::music_table_rows(&musics)))
            }
            PlaylistOutcome::Playlists(playlists) if playlists.is_empty() => {
                info!("No playlists yet")
            }
            PlaylistOutcome::Playlists(playlists) => {
                println!("{}", Table::new(utils::playlist_table_rows(&playlists)))
            }
        }
    }

    fn on_failure(&mut self, error: ApiError) {
        error!("Failed to {}: {}", self.action, error);
    }
}

struct AddPrinter {
    track: String,
    playlist: String,
}

impl AddMusicToPlaylistListener for AddPrinter {
    fn on_success(&mut self) {
        success!("Added {} to {}", self.track, self.playlist);
    }

    fn on_failure(&mut self, error: ApiError) {
        match error {
            ApiError::Duplicate(_) => warning!("{} is already in {}", self.track, self.playlist),
            e => error!("Failed to add {} to {}: {}", self.track, self.playlist, e),
        }
    }
}

pub async fn create_playlist(api: &Api, name: &str, owner: &str) {
    let mut printer = PlaylistPrinter {
        action: format!("create playlist {name}"),
    };
    api.create_playlist(&mut printer, name, owner).await;
}

pub async fn add_to_playlist(api: &Api, playlist: &str, music: MusicInfo) {
    let mut printer = AddPrinter {
        track: music.name().to_string(),
        playlist: playlist.to_string(),
    };
    api.add_music_to_playlist(&mut printer, &music, playlist)
        .await;
}

pub async fn show_playlist(api: &Api, playlist: &str) {
    let mut printer = PlaylistPrinter {
        action: format!("list playlist {playlist}"),
    };
    api.list_playlist_musics(&mut printer, playlist).await;
}

pub async fn list_playlists(api: &Api) {
    let mut printer = PlaylistPrinter {
        action: "list playlists".to_string(),
    };
    api.get_playlists(&mut printer).await;
}
