//! Fetch the manga list into `data/manga.json`. Takes no arguments.

use std::path::Path;

use media_shelf::{
    commands::handle_media_list, config::DEFAULT_ENV_FILE, core::build_client,
    logging::init_logging, Config, MediaKind,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::load(Path::new(DEFAULT_ENV_FILE));
    let client = build_client(config.timeout)?;
    handle_media_list(&client, &config, MediaKind::Manga).await;

    Ok(())
}
