use std::fmt;

use serde::Serialize;

use crate::catalog::{
    status::{ANIME_STATUSES, MANGA_STATUSES},
    Ranked, StatusTable,
};

/// Which AniList list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Anime,
    Manga,
}

impl MediaKind {
    /// Value of the GraphQL `MediaType` variable.
    pub fn as_graphql(&self) -> &'static str {
        match self {
            MediaKind::Anime => "ANIME",
            MediaKind::Manga => "MANGA",
        }
    }

    pub fn status_table(&self) -> &'static StatusTable {
        match self {
            MediaKind::Anime => &ANIME_STATUSES,
            MediaKind::Manga => &MANGA_STATUSES,
        }
    }

    /// Output file name without extension.
    pub fn file_stem(&self) -> &'static str {
        match self {
            MediaKind::Anime => "anime",
            MediaKind::Manga => "manga",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Anime => write!(f, "Anime"),
            MediaKind::Manga => write!(f, "Manga"),
        }
    }
}

/// One list entry as written to `manga.json` / `anime.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    pub id: Option<u64>,
    pub title: String,
    pub cover_image: String,
    /// User score on AniList's 10 point scale, 0 when unscored
    pub score: f64,
    pub progress: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<u32>,
    pub url: String,
}

impl Ranked for MediaEntry {
    fn rank_score(&self) -> f64 {
        self.score
    }

    fn title(&self) -> &str {
        &self.title
    }
}
