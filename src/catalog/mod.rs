//! Normalized output schema shared by every pipeline.
//!
//! A [`Catalog`] holds status [`Category`] groups, each holding entries
//! sorted by descending score then case-insensitive title. Counts are
//! derived when the structure is built and the fields are private, so
//! `count` and `totalCount` can never drift from the entries present.

pub mod status;

use std::cmp::Ordering;

use serde::Serialize;

pub use status::{titleize, StatusTable, UNKNOWN_RANK};


/// An entry that can be ranked inside a category.
pub trait Ranked {
    /// Primary sort key, higher first.
    fn rank_score(&self) -> f64;

    /// Display title, the secondary sort key.
    fn title(&self) -> &str;
}

/// Descending score, then ascending case-insensitive title.
///
/// Titles equal ignoring case fall back to a byte comparison so the result
/// never depends on input order.
pub fn compare_entries<E: Ranked>(a: &E, b: &E) -> Ordering {
    b.rank_score()
        .total_cmp(&a.rank_score())
        .then_with(|| a.title().to_lowercase().cmp(&b.title().to_lowercase()))
        .then_with(|| a.title().cmp(b.title()))
}

pub fn sort_entries<E: Ranked>(entries: &mut [E]) {
    entries.sort_by(compare_entries);
}

/// Entries sharing one status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category<E> {
    status: String,
    display_name: String,
    order: u32,
    entries: Vec<E>,
    count: usize,
}

impl<E: Ranked> Category<E> {
    /// Build a category, resolving label and rank through `table` and
    /// sorting `entries`.
    pub fn new(status: impl Into<String>, table: &StatusTable, mut entries: Vec<E>) -> Self {
        let status = status.into();
        sort_entries(&mut entries);

        Self {
            display_name: table.display_name(&status),
            order: table.rank(&status),
            count: entries.len(),
            status,
            entries,
        }
    }
}

impl<E> Category<E> {
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Top-level document written for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog<E> {
    username: String,
    categories: Vec<Category<E>>,
    total_count: usize,
}

impl<E: Ranked> Catalog<E> {
    /// Assemble a catalog: empty categories are dropped, the rest ordered by
    /// rank (raw status breaks ties), and the total derived from them.
    pub fn new(username: impl Into<String>, categories: Vec<Category<E>>) -> Self {
        let mut categories: Vec<Category<E>> =
            categories.into_iter().filter(|c| !c.is_empty()).collect();
        categories.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.status.cmp(&b.status)));

        Self {
            username: username.into(),
            total_count: categories.iter().map(Category::count).sum(),
            categories,
        }
    }

    /// Build from `(status, entries)` groups labelled through `table`.
    pub fn from_groups<I>(username: impl Into<String>, table: &StatusTable, groups: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<E>)>,
    {
        let categories = groups
            .into_iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(status, entries)| Category::new(status, table, entries))
            .collect();

        Self::new(username, categories)
    }
}

impl<E> Catalog<E> {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn categories(&self) -> &[Category<E>] {
        &self.categories
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// `(displayName, count)` per category, in output order.
    pub fn summary(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.categories
            .iter()
            .map(|c| (c.display_name.as_str(), c.count))
    }
}
