//! Runtime configuration: account, output location, credentials and service URLs.
//!
//! Credentials are read from the process environment first and from a
//! `.env`-style file second. The file is parsed into a map instead of being
//! loaded into the process environment, so resolving never mutates global
//! state.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use tracing::{debug, warn};

use crate::{
    anilist::http::ANILIST_API_URL,
    error::{Result, ShelfError},
    tmdb::{TMDB_API_URL, TMDB_IMAGE_URL},
    trakt::http::TRAKT_API_URL,
};


/// Account the lists are fetched for.
pub const DEFAULT_USERNAME: &str = "AniviaFlome";
pub const DEFAULT_OUT_DIR: &str = "data";
pub const DEFAULT_ENV_FILE: &str = ".env";

pub const TRAKT_CLIENT_ID_ENV_VAR: &str = "TRAKT_CLIENT_ID";
pub const TMDB_API_KEY_ENV_VAR: &str = "TMDB_API_KEY";

/// Per-request timeout for every outgoing call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API credentials. Empty values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub trakt_client_id: Option<String>,
    pub tmdb_api_key: Option<String>,
}

impl Credentials {
    /// Resolve credentials from an environment lookup, falling back to values
    /// parsed from an env file. A variable present in the environment always
    /// wins, even when it is empty.
    pub fn resolve<F>(env_lookup: F, file_values: &HashMap<String, String>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str| {
            env_lookup(key)
                .or_else(|| file_values.get(key).cloned())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            trakt_client_id: pick(TRAKT_CLIENT_ID_ENV_VAR),
            tmdb_api_key: pick(TMDB_API_KEY_ENV_VAR),
        }
    }

    /// Resolve against the real process environment and `env_file`.
    pub fn from_env(env_file: &Path) -> Self {
        let file_values = read_env_file(env_file);
        Self::resolve(|key| std::env::var(key).ok(), &file_values)
    }

    /// The Trakt client id, required by the Trakt pipelines.
    pub fn trakt_client_id(&self) -> Result<&str> {
        self.trakt_client_id
            .as_deref()
            .ok_or_else(|| ShelfError::MissingCredential {
                env_var: TRAKT_CLIENT_ID_ENV_VAR.to_string(),
            })
    }

    pub fn tmdb_api_key(&self) -> Option<&str> {
        self.tmdb_api_key.as_deref()
    }
}

/// Values of the env file at `path`, or an empty map when there is none.
///
/// A file that exists but cannot be read is logged and ignored, so a broken
/// `.env` never stops the pipelines that do not need credentials.
pub fn read_env_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        debug!("No env file at {}", path.display());
        return HashMap::new();
    }

    parse_env_file(path).unwrap_or_else(|e| {
        warn!("Ignoring {}: {}", path.display(), e);
        HashMap::new()
    })
}

/// Parse a `KEY=value` env file into a map.
///
/// Lines that fail to parse are skipped with a warning; an I/O failure fails
/// the whole file. The first occurrence of a key wins.
pub fn parse_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let mut values = HashMap::new();
    for item in dotenvy::from_path_iter(path)? {
        match item {
            Ok((key, value)) => {
                values.entry(key).or_insert(value);
            }
            Err(dotenvy::Error::LineParse(line, index)) => {
                warn!("Skipping line in {} at {}: {}", path.display(), index, line)
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(values)
}

/// Base URLs of the external services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub anilist: String,
    pub trakt: String,
    pub tmdb: String,
    pub tmdb_images: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            anilist: ANILIST_API_URL.to_string(),
            trakt: TRAKT_API_URL.to_string(),
            tmdb: TMDB_API_URL.to_string(),
            tmdb_images: TMDB_IMAGE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub out_dir: PathBuf,
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub timeout: Duration,
}

impl Config {
    /// Default account, output directory and service URLs with the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            credentials,
            endpoints: Endpoints::default(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Defaults plus credentials resolved from the environment and `env_file`.
    pub fn load(env_file: &Path) -> Self {
        Self::new(Credentials::from_env(env_file))
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Path of the catalog file named `stem` inside the output directory.
    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{stem}.json"))
    }
}
