//! Fetch Trakt movies into `data/movies.json`. Takes no arguments.
//!
//! Credentials come from the environment or `.env`; without
//! `TRAKT_CLIENT_ID` the run is skipped.

use std::path::Path;

use media_shelf::{
    commands::handle_watch_lists, config::DEFAULT_ENV_FILE, core::build_client,
    logging::init_logging, Config, TraktKind,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::load(Path::new(DEFAULT_ENV_FILE));
    let client = build_client(config.timeout)?;
    handle_watch_lists(&client, &config, TraktKind::Movies).await;

    Ok(())
}
