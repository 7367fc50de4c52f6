//! Trakt movies/shows pipeline

use std::path::Path;

use reqwest::Client;
use tracing::info;

use super::common::{report, PipelineOutcome};
use crate::{
    config::TMDB_API_KEY_ENV_VAR,
    core::write_catalog,
    trakt::{fetch_watch_snapshot, resolve_posters, transform_watch_lists},
    Catalog, Config, Result, TraktKind, WatchEntry,
};

/// Fetch the `kind` watch lists and write `<out_dir>/<kind>.json`.
///
/// Skipped when no Trakt client id is configured.
pub async fn handle_watch_lists(client: &Client, config: &Config, kind: TraktKind) -> PipelineOutcome {
    let client_id = match config.credentials.trakt_client_id() {
        Ok(id) => id,
        Err(e) => {
            info!("Skipping {} ({})", kind, e);
            return PipelineOutcome::Skipped {
                reason: e.to_string(),
            };
        }
    };

    info!("Fetching {} for: {}", kind, config.username);
    if config.credentials.tmdb_api_key().is_some() {
        info!("  (with TMDB posters)");
    } else {
        info!("  (without posters - {} not set)", TMDB_API_KEY_ENV_VAR);
    }

    let path = config.output_path(kind.file_stem());
    let result = run_watch_lists(client, config, client_id, kind, &path).await;

    report(&kind.to_string(), path, result)
}

async fn run_watch_lists(
    client: &Client,
    config: &Config,
    client_id: &str,
    kind: TraktKind,
    path: &Path,
) -> Result<Catalog<WatchEntry>> {
    let mut snapshot = fetch_watch_snapshot(client, config, client_id, kind).await?;
    snapshot.posters = resolve_posters(client, config, kind, &snapshot).await;

    let catalog = transform_watch_lists(&snapshot, &config.username, kind);
    write_catalog(path, &catalog)?;
    Ok(catalog)
}
