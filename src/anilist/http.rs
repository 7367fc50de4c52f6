use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client,
};
use serde_json::{json, Value};
use tracing::debug;

use super::types::MediaKind;
use crate::{error::ShelfError, Result};

/// AniList GraphQL endpoint.
pub const ANILIST_API_URL: &str = "https://graphql.anilist.co";

pub const MEDIA_LIST_QUERY: &str = r#"
query ($username: String, $type: MediaType) {
    MediaListCollection(userName: $username, type: $type) {
        lists {
            status
            entries {
                score(format: POINT_10)
                progress
                media {
                    id
                    title { english romaji native }
                    episodes
                    chapters
                    volumes
                    coverImage { large }
                    status
                    siteUrl
                }
            }
        }
    }
}
"#;

/// POST the list query for `username` and return the raw response document.
///
/// Non-2xx responses and GraphQL errors without data are errors.
pub async fn fetch_media_list(
    client: &Client,
    endpoint: &str,
    username: &str,
    kind: MediaKind,
) -> Result<Value> {
    let body = json!({
        "query": MEDIA_LIST_QUERY,
        "variables": { "username": username, "type": kind.as_graphql() },
    });

    debug!("POST {} ({} list for {})", endpoint, kind.as_graphql(), username);

    let res = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    check_graphql_errors(&res)?;
    Ok(res)
}

/// A response with `errors` and no usable `data` is a failed query.
pub fn check_graphql_errors(res: &Value) -> Result<()> {
    let has_data = res.get("data").is_some_and(|d| !d.is_null());
    let errors = res
        .get("errors")
        .and_then(Value::as_array)
        .filter(|errors| !errors.is_empty());

    match errors {
        Some(errors) if !has_data => {
            let message = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; ");
            Err(ShelfError::GraphQl {
                message: if message.is_empty() {
                    "unknown error".to_string()
                } else {
                    message
                },
            })
        }
        _ => Ok(()),
    }
}
