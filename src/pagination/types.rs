//! Pagination types
//!
//! Defines how a decoded page leads to the next request.

use crate::decode::{PageEnvelope, NEXT_LINK};
use crate::error::Result;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Another page lives at this URL
    Continue {
        /// Absolute URL of the next page, used verbatim
        url: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }
}

/// Progress through one paginated fetch
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages processed so far
    pub pages: u32,
    /// Total records seen so far
    pub total_fetched: u64,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more processed page
    pub fn next_page(&mut self) {
        self.pages += 1;
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}

/// Follows a named link in each page's `links` object
#[derive(Debug, Clone)]
pub struct LinkPaginator {
    /// Link to follow (default: "next")
    pub rel: String,
}

impl Default for LinkPaginator {
    fn default() -> Self {
        Self::new(NEXT_LINK)
    }
}

impl LinkPaginator {
    /// Create a paginator following the given link
    pub fn new(rel: impl Into<String>) -> Self {
        Self { rel: rel.into() }
    }

    /// Account for a decoded page and work out what to request next.
    ///
    /// A malformed link value is an error; an absent or null link ends
    /// pagination.
    pub fn process_page(
        &self,
        page: &PageEnvelope,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.next_page();
        state.add_fetched(page.data.len() as u64);

        match page.link(&self.rel)? {
            Some(url) => Ok(NextPage::with_url(url)),
            None => Ok(NextPage::Done),
        }
    }
}
