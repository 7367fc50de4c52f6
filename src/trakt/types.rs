use std::{collections::HashMap, fmt};

use serde::Serialize;
use serde_json::Value;

use crate::catalog::Ranked;

/// Which Trakt media type to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraktKind {
    Movies,
    Shows,
}

impl TraktKind {
    /// Path segment in Trakt URLs (`/users/{user}/watched/movies`).
    pub fn path_segment(&self) -> &'static str {
        match self {
            TraktKind::Movies => "movies",
            TraktKind::Shows => "shows",
        }
    }

    /// Key wrapping the media object inside list and rating items.
    pub fn item_key(&self) -> &'static str {
        match self {
            TraktKind::Movies => "movie",
            TraktKind::Shows => "show",
        }
    }

    /// TMDB resource type used for posters.
    pub fn tmdb_type(&self) -> &'static str {
        match self {
            TraktKind::Movies => "movie",
            TraktKind::Shows => "tv",
        }
    }

    /// Output file name without extension.
    pub fn file_stem(&self) -> &'static str {
        self.path_segment()
    }
}

impl fmt::Display for TraktKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraktKind::Movies => write!(f, "Movies"),
            TraktKind::Shows => write!(f, "Shows"),
        }
    }
}

/// The two Trakt lists that become categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchStatus {
    Watched,
    Watchlist,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 2] = [WatchStatus::Watched, WatchStatus::Watchlist];

    /// Raw status key, also the endpoint path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Watched => "watched",
            WatchStatus::Watchlist => "watchlist",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything fetched for one run, before transformation.
#[derive(Debug, Clone, Default)]
pub struct WatchSnapshot {
    /// User rating by Trakt id
    pub ratings: HashMap<u64, u8>,
    pub watched: Vec<Value>,
    pub watchlist: Vec<Value>,
    /// Poster URL by TMDB id
    pub posters: HashMap<u64, String>,
}

impl WatchSnapshot {
    pub fn items(&self, status: WatchStatus) -> &[Value] {
        match status {
            WatchStatus::Watched => &self.watched,
            WatchStatus::Watchlist => &self.watchlist,
        }
    }

    pub fn items_mut(&mut self, status: WatchStatus) -> &mut Vec<Value> {
        match status {
            WatchStatus::Watched => &mut self.watched,
            WatchStatus::Watchlist => &mut self.watchlist,
        }
    }
}

/// One movie/show as written to `movies.json` / `shows.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEntry {
    pub id: Option<u64>,
    pub title: String,
    pub year: Option<u32>,
    pub poster_image: String,
    /// User rating 1-10, 0 when unrated
    pub rating: u8,
    pub url: String,
}

impl Ranked for WatchEntry {
    fn rank_score(&self) -> f64 {
        f64::from(self.rating)
    }

    fn title(&self) -> &str {
        &self.title
    }
}
