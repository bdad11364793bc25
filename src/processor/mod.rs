//! Entity processor module
//!
//! # Overview
//!
//! The host drives imports through entity processors: each one is
//! initialised from an entity's attributes and then asked for rows until it
//! returns `None`. [`JsonApiEntityProcessor`] fetches everything behind the
//! entity's `url` attribute up front and hands the records out one by one.

mod entity;
mod types;

pub use entity::{JsonApiEntityProcessor, URL};
pub use types::{EntityContext, RowProducible};
