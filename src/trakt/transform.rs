//! Trakt snapshot → [`Catalog`] of [`WatchEntry`].

use serde_json::Value;

use super::types::{TraktKind, WatchEntry, WatchSnapshot, WatchStatus};
use crate::{
    catalog::{status::TRAKT_STATUSES, Catalog},
    core::json::{object_field, str_field, u32_field, u64_field, NULL},
};

pub const TRAKT_SITE_URL: &str = "https://trakt.tv";

pub const UNKNOWN_TITLE: &str = "Unknown";

/// The media object of a list item: wrapped under `movie`/`show`, or the item itself.
pub fn media_of(item: &Value, kind: TraktKind) -> &Value {
    object_field(item, kind.item_key()).unwrap_or(item)
}

pub fn ids_of(item: &Value, kind: TraktKind) -> &Value {
    object_field(media_of(item, kind), "ids").unwrap_or(&NULL)
}

/// Map one list item, joining its rating and poster from the snapshot.
pub fn watch_entry(item: &Value, kind: TraktKind, snapshot: &WatchSnapshot) -> WatchEntry {
    let media = media_of(item, kind);
    let ids = ids_of(item, kind);
    let trakt_id = u64_field(ids, "trakt");

    WatchEntry {
        id: trakt_id,
        title: str_field(media, "title")
            .unwrap_or(UNKNOWN_TITLE)
            .to_string(),
        year: u32_field(media, "year"),
        poster_image: u64_field(ids, "tmdb")
            .and_then(|tmdb_id| snapshot.posters.get(&tmdb_id))
            .cloned()
            .unwrap_or_default(),
        rating: trakt_id
            .and_then(|id| snapshot.ratings.get(&id))
            .copied()
            .unwrap_or(0),
        url: format!(
            "{}/{}/{}",
            TRAKT_SITE_URL,
            kind.path_segment(),
            str_field(ids, "slug").unwrap_or_default()
        ),
    }
}

/// One category per non-empty list, ordered watched then watchlist.
pub fn transform_watch_lists(
    snapshot: &WatchSnapshot,
    username: &str,
    kind: TraktKind,
) -> Catalog<WatchEntry> {
    let groups = WatchStatus::ALL.iter().map(|status| {
        let entries: Vec<WatchEntry> = snapshot
            .items(*status)
            .iter()
            .map(|item| watch_entry(item, kind, snapshot))
            .collect();
        (status.as_str().to_string(), entries)
    });

    Catalog::from_groups(username, &TRAKT_STATUSES, groups)
}
