//! Pipeline runners: fetch → transform → persist, one per data source.
//!
//! Handlers never return errors. Every failure is logged and reported as a
//! [`PipelineOutcome`], and a failed run leaves the output file untouched.

pub mod common;
pub mod media_list;
pub mod watch_lists;


pub use common::PipelineOutcome;
pub use media_list::handle_media_list;
pub use watch_lists::handle_watch_lists;

use reqwest::Client;

use crate::{Config, MediaKind, TraktKind};

/// Run every pipeline in sequence.
pub async fn handle_all(client: &Client, config: &Config) -> Vec<PipelineOutcome> {
    let mut outcomes = Vec::new();

    for kind in [MediaKind::Manga, MediaKind::Anime] {
        outcomes.push(handle_media_list(client, config, kind).await);
    }
    for kind in [TraktKind::Movies, TraktKind::Shows] {
        outcomes.push(handle_watch_lists(client, config, kind).await);
    }

    outcomes
}
