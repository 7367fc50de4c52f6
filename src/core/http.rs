//! HTTP utilities for the external APIs

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client,
};

use crate::Result;

pub const USER_AGENT: &str = concat!("media-shelf/", env!("CARGO_PKG_VERSION"));

pub const TRAKT_API_VERSION: &str = "2";

/// Build the shared client; every request made through it is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Headers required by every Trakt request.
pub fn trakt_headers(client_id: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    h.insert(
        HeaderName::from_static("trakt-api-version"),
        HeaderValue::from_static(TRAKT_API_VERSION),
    );
    h.insert(
        HeaderName::from_static("trakt-api-key"),
        HeaderValue::from_str(client_id)?,
    );
    Ok(h)
}
