//! Trakt REST pipeline: watched titles and the watchlist, joined with the
//! user's ratings and decorated with TMDB posters.

pub mod http;
pub mod transform;
pub mod types;

#[cfg(test)]
mod tests;

pub use http::{fetch_watch_snapshot, resolve_posters};
pub use transform::transform_watch_lists;
