//! JSON:API entity processor

use super::types::{EntityContext, RowProducible};
use crate::cursor::RowCursor;
use crate::error::{Error, Result};
use crate::source::Fetchable;
use crate::types::Record;
use tracing::debug;

/// Entity attribute holding the query to fetch
pub const URL: &str = "url";

/// Serves the records behind an entity's `url` one row at a time
#[derive(Debug)]
pub struct JsonApiEntityProcessor {
    url: String,
    rows: RowCursor,
}

impl JsonApiEntityProcessor {
    /// Resolve the `url` attribute and fetch everything behind it
    pub async fn init(context: &EntityContext, source: &dyn Fetchable) -> Result<Self> {
        let url = context
            .resolved_attribute(URL)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::required_attribute(URL))?;

        let records = source.fetch(&url).await?;
        debug!("Entity query {} produced {} rows", url, records.len());

        Ok(Self {
            url,
            rows: RowCursor::new(records),
        })
    }

    /// Query this processor was initialised with
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Rows not yet handed out
    pub fn remaining(&self) -> usize {
        self.rows.remaining()
    }
}

impl RowProducible for JsonApiEntityProcessor {
    fn next_row(&mut self) -> Option<Record> {
        if !self.rows.has_next() {
            return None;
        }
        self.rows.next()
    }
}
