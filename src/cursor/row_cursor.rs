//! Sequential row cursor
//!
//! Hands out the records of one fetch in arrival order. The cursor only
//! moves forward and never goes back to the server.

use crate::types::{Record, Records};
use std::collections::VecDeque;

/// Forward-only cursor over fetched records
#[derive(Debug, Clone, Default)]
pub struct RowCursor {
    rows: VecDeque<Record>,
    position: usize,
}

impl RowCursor {
    /// Wrap an accumulated result
    pub fn new(records: Records) -> Self {
        Self {
            rows: records.into(),
            position: 0,
        }
    }

    /// Whether another record is available. Does not consume anything.
    pub fn has_next(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Number of records already handed out
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of records still to come
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    /// Total number of records, consumed or not
    pub fn len(&self) -> usize {
        self.position + self.rows.len()
    }

    /// Whether the underlying result had no records at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for RowCursor {
    type Item = Record;

    /// Next record, or `None` once exhausted. Exhaustion is permanent.
    fn next(&mut self) -> Option<Record> {
        let row = self.rows.pop_front()?;
        self.position += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rows.len(), Some(self.rows.len()))
    }
}

impl ExactSizeIterator for RowCursor {}

impl std::iter::FusedIterator for RowCursor {}

impl From<Records> for RowCursor {
    fn from(records: Records) -> Self {
        Self::new(records)
    }
}
