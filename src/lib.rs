// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # JSON:API Connector
//!
//! A Rust-native connector that pulls records from a paginated JSON API and
//! hands them to an import pipeline one row at a time.
//!
//! ## Features
//!
//! - **Link Pagination**: follows each page's `links.next` until it runs out
//! - **Charset Detection**: configured override, `Content-Type` charset, or UTF-8
//! - **All-or-Nothing Fetches**: any failing page aborts the whole fetch
//! - **Row Cursor**: forward-only, pull-based access to the fetched records
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jsonapi_connector::processor::{EntityContext, JsonApiEntityProcessor, RowProducible};
//! use jsonapi_connector::{ConnectorConfig, JsonApiDataSource, QueryCounter, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConnectorConfig::builder()
//!         .base_url("https://api.example.com/")
//!         .build();
//!     let source = JsonApiDataSource::new(config, QueryCounter::new())?;
//!
//!     let entity = EntityContext::new(Default::default()).attribute("url", "items");
//!     let mut processor = JsonApiEntityProcessor::init(&entity, &source).await?;
//!     while let Some(row) = processor.next_row() {
//!         println!("{row:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! query ──► JsonApiDataSource::fetch ──► Records ──► RowCursor ──► next_row()
//!              │
//!              ├─ resolve: absolute URI or base_url + query
//!              ├─ http:    GET page, connect/read timeouts
//!              ├─ decode:  charset, then { data: [...], links: {...} }
//!              └─ paginate: links.next, until absent or null
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document error variant fields before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connector configuration
pub mod config;

/// Token substitution
pub mod template;

/// HTTP client and charset resolution
pub mod http;

/// Page envelope decoding
pub mod decode;

/// Next-link pagination
pub mod pagination;

/// Paginated data sources
pub mod source;

/// Forward-only row cursor
pub mod cursor;

/// Entity processors for the import pipeline
pub mod processor;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ConnectorConfig;
pub use cursor::RowCursor;
pub use processor::{JsonApiEntityProcessor, RowProducible};
pub use source::{Fetchable, JsonApiDataSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
