//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_ENV_FILE, DEFAULT_OUT_DIR};

#[derive(Debug, Parser)]
#[clap(name = "media-shelf", about = "Fetch media lists into static JSON catalogs")]
pub struct MediaShelf {
    /// Directory the catalog files are written to.
    #[clap(long, global = true, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Env file with `TRAKT_CLIENT_ID` / `TMDB_API_KEY` (exported variables win).
    #[clap(long, global = true, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Account to fetch instead of the built-in one.
    #[clap(long, short, global = true)]
    pub username: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Manga list from AniList → manga.json
    Manga,

    /// Anime list from AniList → anime.json
    Anime,

    /// Watched movies and watchlist from Trakt → movies.json
    ///
    /// Needs `TRAKT_CLIENT_ID`; posters need `TMDB_API_KEY`.
    Movies,

    /// Watched shows and watchlist from Trakt → shows.json
    Shows,

    /// Run every pipeline in sequence
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let app = MediaShelf::try_parse_from(["media-shelf", "manga"]).unwrap();

        assert_eq!(app.command, Commands::Manga);
        assert_eq!(app.out_dir, PathBuf::from("data"));
        assert_eq!(app.env_file, PathBuf::from(".env"));
        assert!(app.username.is_none());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let app = MediaShelf::try_parse_from([
            "media-shelf",
            "movies",
            "--out-dir",
            "public/data",
            "-u",
            "someone",
        ])
        .unwrap();

        assert_eq!(app.command, Commands::Movies);
        assert_eq!(app.out_dir, PathBuf::from("public/data"));
        assert_eq!(app.username.as_deref(), Some("someone"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(MediaShelf::try_parse_from(["media-shelf"]).is_err());
        assert!(MediaShelf::try_parse_from(["media-shelf", "books"]).is_err());
    }
}
