//! AniList response → [`Catalog`] of [`MediaEntry`].

use std::collections::{BTreeMap, HashSet};

use serde_json::Value;

use super::types::{MediaEntry, MediaKind};
use crate::{
    catalog::Catalog,
    core::json::{array_field, f64_field, object_field, str_field, u32_field, u64_field, NULL},
};

/// Status assumed for lists that do not carry one.
pub const DEFAULT_STATUS: &str = "CURRENT";

pub const UNKNOWN_TITLE: &str = "Unknown";

/// Group the lists of a `MediaListCollection` response by status.
///
/// Lists sharing a status are merged. A media id is kept once across the
/// whole collection: lists that carry a status claim their entries before
/// status-less (custom) lists, which fall into [`DEFAULT_STATUS`]. Missing or
/// malformed fields fall back to defaults, so any JSON value produces a
/// catalog.
pub fn transform_media_list(raw: &Value, username: &str, kind: MediaKind) -> Catalog<MediaEntry> {
    let lists = raw
        .pointer("/data/MediaListCollection/lists")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let (with_status, without_status): (Vec<&Value>, Vec<&Value>) = lists
        .iter()
        .partition(|list| str_field(list, "status").is_some());

    let mut groups: BTreeMap<String, Vec<MediaEntry>> = BTreeMap::new();
    let mut seen: HashSet<u64> = HashSet::new();

    for list in with_status.into_iter().chain(without_status) {
        let status = str_field(list, "status").unwrap_or(DEFAULT_STATUS);
        let bucket = groups.entry(status.to_string()).or_default();

        for raw_entry in array_field(list, "entries") {
            let entry = media_entry(raw_entry);
            if let Some(id) = entry.id {
                if !seen.insert(id) {
                    continue;
                }
            }
            bucket.push(entry);
        }
    }

    Catalog::from_groups(username, kind.status_table(), groups)
}

/// Map one list entry; `media` fields default when absent.
pub fn media_entry(raw: &Value) -> MediaEntry {
    let media = object_field(raw, "media").unwrap_or(&NULL);

    MediaEntry {
        id: u64_field(media, "id"),
        title: resolve_title(media.get("title")),
        cover_image: object_field(media, "coverImage")
            .and_then(|c| str_field(c, "large"))
            .unwrap_or_default()
            .to_string(),
        score: f64_field(raw, "score").unwrap_or(0.0),
        progress: u32_field(raw, "progress").unwrap_or(0),
        episodes: u32_field(media, "episodes"),
        chapters: u32_field(media, "chapters"),
        volumes: u32_field(media, "volumes"),
        url: str_field(media, "siteUrl").unwrap_or_default().to_string(),
    }
}

/// First non-empty of english, romaji, native; otherwise `"Unknown"`.
pub fn resolve_title(title: Option<&Value>) -> String {
    let title = title.unwrap_or(&NULL);

    ["english", "romaji", "native"]
        .iter()
        .find_map(|key| str_field(title, key))
        .unwrap_or(UNKNOWN_TITLE)
        .to_string()
}
