//! TMDB poster lookup.
//!
//! Posters are decoration: a lookup that fails for any reason yields no
//! poster and the pipeline carries on.

use reqwest::Client;
use serde::Deserialize;

use crate::{trakt::types::TraktKind, Result};

/// TMDB v3 API base.
pub const TMDB_API_URL: &str = "https://api.themoviedb.org/3";

/// Image base for 300px wide posters.
pub const TMDB_IMAGE_URL: &str = "https://image.tmdb.org/t/p/w300";

#[derive(Debug, Deserialize)]
struct TmdbDetails {
    #[serde(default)]
    poster_path: Option<String>,
}

/// Look up the poster of one movie/show.
///
/// `Ok(None)` when TMDB knows the title but has no poster. Errors are
/// limited to transport, status and decode failures.
pub async fn lookup_poster(
    client: &Client,
    api_base: &str,
    image_base: &str,
    api_key: &str,
    tmdb_id: u64,
    kind: TraktKind,
) -> Result<Option<String>> {
    let url = format!("{}/{}/{}", api_base, kind.tmdb_type(), tmdb_id);

    let details = client
        .get(&url)
        .query(&[("api_key", api_key)])
        .send()
        .await?
        .error_for_status()?
        .json::<TmdbDetails>()
        .await?;

    Ok(details
        .poster_path
        .filter(|p| !p.is_empty())
        .map(|p| format!("{image_base}{p}")))
}

/// Poster URL, or an empty string when there is no key, no id, or the lookup fails.
pub async fn poster_or_empty(
    client: &Client,
    api_base: &str,
    image_base: &str,
    api_key: Option<&str>,
    tmdb_id: Option<u64>,
    kind: TraktKind,
) -> String {
    let (Some(api_key), Some(tmdb_id)) = (api_key, tmdb_id) else {
        return String::new();
    };

    lookup_poster(client, api_base, image_base, api_key, tmdb_id, kind)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}
