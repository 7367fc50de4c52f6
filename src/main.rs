//! Entry point: parse CLI and dispatch to pipeline handlers.

use clap::Parser;
use media_shelf::{
    cli::{Commands, MediaShelf},
    commands::{handle_all, handle_media_list, handle_watch_lists},
    core::build_client,
    logging::init_logging,
    Config, MediaKind, TraktKind,
};

/// Run the CLI.
///
/// Pipeline failures are logged, not returned; only setup errors exit non-zero.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let app = MediaShelf::parse();

    let mut config = Config::load(&app.env_file).with_out_dir(app.out_dir);
    if let Some(username) = app.username {
        config = config.with_username(username);
    }
    let client = build_client(config.timeout)?;

    match app.command {
        Commands::Manga => {
            handle_media_list(&client, &config, MediaKind::Manga).await;
        }
        Commands::Anime => {
            handle_media_list(&client, &config, MediaKind::Anime).await;
        }
        Commands::Movies => {
            handle_watch_lists(&client, &config, TraktKind::Movies).await;
        }
        Commands::Shows => {
            handle_watch_lists(&client, &config, TraktKind::Shows).await;
        }
        Commands::All => {
            handle_all(&client, &config).await;
        }
    }

    Ok(())
}
