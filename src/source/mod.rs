//! Data source module
//!
//! # Overview
//!
//! A data source turns a query into the full, ordered list of records behind
//! it. [`JsonApiDataSource`] resolves the query against the configured base
//! URL, then requests pages one at a time, following each page's `next` link
//! until none is left. Either every page succeeds and all records are
//! returned, or the whole fetch fails.

mod fetcher;
mod types;

pub use fetcher::{is_absolute_uri, JsonApiDataSource};
pub use types::Fetchable;
