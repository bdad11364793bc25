//! Pagination module
//!
//! # Overview
//!
//! Pages are chained through the `next` link of each page envelope. The
//! paginator inspects a decoded page and decides whether another request is
//! needed, tracking how many pages and records have gone by.

mod types;

pub use types::{LinkPaginator, NextPage, PaginationState};

#[cfg(test)]
mod tests;
