//! Media Shelf Library
//!
//! Fetches personal media lists from public tracking services and reshapes
//! them into small static JSON catalogs that a website can load directly.
//!
//! ## Pipelines
//!
//! - **AniList**: manga and anime lists through a single GraphQL query
//! - **Trakt**: watched movies/shows and watchlists, joined with the user's
//!   ratings, with optional poster lookup through TMDB
//!
//! Every pipeline runs fetch → transform → persist and never propagates a
//! failure: problems are logged and the run simply leaves no output file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use media_shelf::{commands::handle_media_list, core::build_client, Config, MediaKind};
//!
//! # async fn example() -> media_shelf::Result<()> {
//! let config = Config::load(std::path::Path::new(".env"));
//! let client = build_client(config.timeout)?;
//!
//! let outcome = handle_media_list(&client, &config, MediaKind::Manga).await;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Trakt pipelines need a client id; TMDB posters need an API key. Both can
//! live in a `.env` file, which never overrides variables already exported:
//! ```bash
//! export TRAKT_CLIENT_ID=abc123
//! export TMDB_API_KEY=def456
//! ```

pub mod anilist;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod tmdb;
pub mod trakt;

// Re-export commonly used types
pub use anilist::types::{MediaEntry, MediaKind};
pub use catalog::{Catalog, Category, Ranked};
pub use config::{Config, Credentials, Endpoints};
pub use error::{Result, ShelfError};
pub use trakt::types::{TraktKind, WatchEntry, WatchStatus};
