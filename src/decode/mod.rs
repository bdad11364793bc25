//! Response decoder module
//!
//! # Overview
//!
//! Turns a page body into a [`PageEnvelope`]: the `data` array of records
//! and the `links` object used for pagination. The body is decoded with the
//! charset resolved for that page before it is parsed as JSON.

mod envelope;

pub use envelope::{decode_envelope, PageEnvelope, NEXT_LINK};

#[cfg(test)]
mod tests;
