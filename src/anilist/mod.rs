//! AniList GraphQL pipeline: a user's manga or anime list.

pub mod http;
pub mod transform;
pub mod types;


pub use http::fetch_media_list;
pub use transform::transform_media_list;
