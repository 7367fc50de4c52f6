use std::collections::HashMap;

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::{debug, warn};

use super::{
    transform::ids_of,
    types::{TraktKind, WatchSnapshot, WatchStatus},
};
use crate::{
    config::Config,
    core::{
        http::trakt_headers,
        json::{object_field, u64_field},
    },
    tmdb::poster_or_empty,
    Result,
};

/// Trakt API base.
pub const TRAKT_API_URL: &str = "https://api.trakt.tv";

async fn get_json(
    client: &Client,
    url: &str,
    headers: &HeaderMap,
    query: &[(&str, &str)],
) -> Result<Value> {
    debug!("GET {}", url);

    let v = client
        .get(url)
        .headers(headers.clone())
        .query(query)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(v)
}

/// `GET /users/{user}/ratings/{kind}` as a map of Trakt id → rating.
pub async fn fetch_ratings(
    client: &Client,
    base: &str,
    username: &str,
    kind: TraktKind,
    headers: &HeaderMap,
) -> Result<HashMap<u64, u8>> {
    let url = format!("{base}/users/{username}/ratings/{}", kind.path_segment());
    let v = get_json(client, &url, headers, &[]).await?;
    Ok(parse_ratings(&v, kind))
}

/// Ratings without a Trakt id are dropped; a missing rating counts as 0.
pub fn parse_ratings(v: &Value, kind: TraktKind) -> HashMap<u64, u8> {
    let empty = Vec::new();
    let arr = v.as_array().unwrap_or(&empty);

    arr.iter()
        .filter_map(|r| {
            let id = object_field(r, kind.item_key())
                .and_then(|m| object_field(m, "ids"))
                .and_then(|ids| u64_field(ids, "trakt"))?;
            let rating = u64_field(r, "rating")
                .and_then(|n| u8::try_from(n).ok())
                .unwrap_or(0);
            Some((id, rating))
        })
        .collect()
}

/// `GET /users/{user}/{status}/{kind}?extended=full`. A non-array body is empty.
pub async fn fetch_list(
    client: &Client,
    base: &str,
    username: &str,
    kind: TraktKind,
    status: WatchStatus,
    headers: &HeaderMap,
) -> Result<Vec<Value>> {
    let url = format!(
        "{base}/users/{username}/{}/{}",
        status.as_str(),
        kind.path_segment()
    );

    match get_json(client, &url, headers, &[("extended", "full")]).await? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

/// Fetch ratings and both lists.
///
/// Each endpoint fails on its own: the failure is logged and that part of
/// the snapshot stays empty. Only an unusable client id is an error.
pub async fn fetch_watch_snapshot(
    client: &Client,
    config: &Config,
    client_id: &str,
    kind: TraktKind,
) -> Result<WatchSnapshot> {
    let headers = trakt_headers(client_id)?;
    let base = config.endpoints.trakt.as_str();
    let username = config.username.as_str();

    let ratings = match fetch_ratings(client, base, username, kind, &headers).await {
        Ok(ratings) => ratings,
        Err(e) => {
            warn!("Could not fetch ratings: {}", e);
            HashMap::new()
        }
    };

    let mut snapshot = WatchSnapshot {
        ratings,
        ..Default::default()
    };

    for status in WatchStatus::ALL {
        let items = match fetch_list(client, base, username, kind, status, &headers).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Could not fetch {}: {}", status, e);
                Vec::new()
            }
        };
        *snapshot.items_mut(status) = items;
    }

    Ok(snapshot)
}

/// Look up posters for every TMDB id in the snapshot, one request at a time.
///
/// Returns an empty map without a TMDB key. Ids shared by both lists are
/// looked up once.
pub async fn resolve_posters(
    client: &Client,
    config: &Config,
    kind: TraktKind,
    snapshot: &WatchSnapshot,
) -> HashMap<u64, String> {
    let mut posters = HashMap::new();
    let Some(api_key) = config.credentials.tmdb_api_key() else {
        return posters;
    };

    let items = WatchStatus::ALL
        .iter()
        .flat_map(|status| snapshot.items(*status));

    for item in items {
        let Some(tmdb_id) = u64_field(ids_of(item, kind), "tmdb") else {
            continue;
        };
        if posters.contains_key(&tmdb_id) {
            continue;
        }

        let poster = poster_or_empty(
            client,
            &config.endpoints.tmdb,
            &config.endpoints.tmdb_images,
            Some(api_key),
            Some(tmdb_id),
            kind,
        )
        .await;
        posters.insert(tmdb_id, poster);
    }

    posters
}
