//! Fixed status tables: raw status key → sort rank and display label.

/// Rank given to statuses missing from a table; they sort last.
pub const UNKNOWN_RANK: u32 = 99;

/// Lookup of `(status, rank, label)` rows.
#[derive(Debug, Clone, Copy)]
pub struct StatusTable {
    rows: &'static [(&'static str, u32, &'static str)],
}

impl StatusTable {
    pub const fn new(rows: &'static [(&'static str, u32, &'static str)]) -> Self {
        Self { rows }
    }

    fn row(&self, status: &str) -> Option<&(&'static str, u32, &'static str)> {
        self.rows.iter().find(|(key, _, _)| *key == status)
    }

    pub fn rank(&self, status: &str) -> u32 {
        self.row(status).map_or(UNKNOWN_RANK, |(_, rank, _)| *rank)
    }

    /// Mapped label, or the titleized raw key when unmapped.
    pub fn display_name(&self, status: &str) -> String {
        self.row(status)
            .map_or_else(|| titleize(status), |(_, _, label)| label.to_string())
    }
}

pub const MANGA_STATUSES: StatusTable = StatusTable::new(&[
    ("CURRENT", 0, "Reading"),
    ("REPEATING", 1, "Rereading"),
    ("COMPLETED", 2, "Completed"),
    ("PAUSED", 3, "On Hold"),
    ("DROPPED", 4, "Dropped"),
    ("PLANNING", 5, "Plan to Read"),
]);

pub const ANIME_STATUSES: StatusTable = StatusTable::new(&[
    ("CURRENT", 0, "Watching"),
    ("REPEATING", 1, "Rewatching"),
    ("COMPLETED", 2, "Completed"),
    ("PAUSED", 3, "On Hold"),
    ("DROPPED", 4, "Dropped"),
    ("PLANNING", 5, "Plan to Watch"),
]);

pub const TRAKT_STATUSES: StatusTable =
    StatusTable::new(&[("watched", 0, "Watched"), ("watchlist", 1, "Watchlist")]);

/// `"ON_HOLD"` → `"On Hold"`, `"rewatching"` → `"Rewatching"`.
pub fn titleize(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
