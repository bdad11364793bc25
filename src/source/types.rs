//! Data source traits

use crate::error::Result;
use crate::types::Records;
use async_trait::async_trait;

/// Something that can produce every record behind a query
#[async_trait]
pub trait Fetchable: Send + Sync {
    /// Fetch all records for `query`, in order.
    ///
    /// Never returns a partial result: any failure discards the records
    /// gathered so far.
    async fn fetch(&self, query: &str) -> Result<Records>;
}
