//! Core utilities shared by the pipelines
//!
//! - `http`: client construction and request headers
//! - `json`: defaulting accessors for loosely shaped API payloads
//! - `persist`: writing catalogs to disk

pub mod http;
pub mod json;
pub mod persist;

// Re-export commonly used items for convenience
pub use http::{build_client, trakt_headers};
pub use persist::{write_catalog, write_string};
