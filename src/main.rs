use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use espotifai::{Api, MusicInfo, cli, config, error, logging};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Show debug diagnostics on stderr
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Request an access token with client credentials
    Auth(AuthOptions),

    /// Search tracks by name
    Search(SearchOptions),

    /// Manage local playlists
    #[command(subcommand)]
    Playlist(PlaylistCommand),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone)]
pub struct AuthOptions {
    /// Spotify client id
    #[clap(long, env = "SPOTIFY_API_AUTH_CLIENT_ID", hide_env_values = true)]
    client_id: Option<String>,

    /// Spotify client secret
    #[clap(long, env = "SPOTIFY_API_AUTH_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchOptions {
    /// Name of the track
    name: String,

    /// Access token; defaults to the cached one
    #[clap(long)]
    token: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistCommand {
    /// Create a new playlist
    Create {
        name: String,
        #[clap(long)]
        owner: String,
    },

    /// Add a track to a playlist
    Add(AddOptions),

    /// Show the tracks of a playlist
    Show { name: String },

    /// List all playlists
    List,
}

#[derive(Args, Debug, Clone)]
pub struct AddOptions {
    /// Playlist to add the track to
    playlist: String,
    #[clap(long)]
    name: String,
    #[clap(long)]
    artist: String,
    /// Spotify track id
    #[clap(long, default_value = "")]
    id: String,
    #[clap(long, default_value = "")]
    uri: String,
    #[clap(long, default_value = "")]
    album: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let settings = match config::Config::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };
    let api = Api::from_config(&settings);

    match cli.command {
        Command::Auth(opt) => {
            let client_id = opt.client_id.or(settings.client_id).unwrap_or_default();
            let client_secret = opt
                .client_secret
                .or(settings.client_secret)
                .unwrap_or_default();
            cli::auth(&api, &client_id, &client_secret).await
        }
        Command::Search(opt) => cli::search(&api, &opt.name, opt.token).await,
        Command::Playlist(cmd) => match cmd {
            PlaylistCommand::Create { name, owner } => {
                cli::create_playlist(&api, &name, &owner).await
            }
            PlaylistCommand::Add(opt) => {
                let music = MusicInfo::new(opt.name, opt.artist)
                    .with_id(opt.id)
                    .with_uri(opt.uri)
                    .with_album(opt.album);
                cli::add_to_playlist(&api, &opt.playlist, music).await
            }
            PlaylistCommand::Show { name } => cli::show_playlist(&api, &name).await,
            PlaylistCommand::List => cli::list_playlists(&api).await,
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
