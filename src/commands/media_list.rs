//! AniList manga/anime pipeline

use std::path::Path;

use reqwest::Client;
use tracing::info;

use super::common::{report, PipelineOutcome};
use crate::{
    anilist::{fetch_media_list, transform_media_list},
    core::write_catalog,
    Catalog, Config, MediaEntry, MediaKind, Result,
};

/// Fetch the `kind` list and write `<out_dir>/<kind>.json`.
pub async fn handle_media_list(client: &Client, config: &Config, kind: MediaKind) -> PipelineOutcome {
    info!("Fetching {} for: {}", kind, config.username);

    let path = config.output_path(kind.file_stem());
    let result = run_media_list(client, config, kind, &path).await;

    report(&kind.to_string(), path, result)
}

async fn run_media_list(
    client: &Client,
    config: &Config,
    kind: MediaKind,
    path: &Path,
) -> Result<Catalog<MediaEntry>> {
    let raw = fetch_media_list(client, &config.endpoints.anilist, &config.username, kind).await?;
    let catalog = transform_media_list(&raw, &config.username, kind);
    write_catalog(path, &catalog)?;
    Ok(catalog)
}
