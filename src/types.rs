//! Common types used throughout the connector
//!
//! This module contains shared type definitions, type aliases,
//! and the query counter shared with the host import session.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, insertion ordered
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One decoded JSON object from a page's `data` array
pub type Record = JsonObject;

/// Records accumulated across all pages of one fetch
pub type Records = Vec<Record>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Query Counter
// ============================================================================

/// Count of pages fetched during an import session.
///
/// Cloning yields another handle to the same counter. Data sources only ever
/// increment it; the host reads it for reporting.
#[derive(Debug, Clone, Default)]
pub struct QueryCounter {
    inner: Arc<AtomicU64>,
}

impl QueryCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more query
    pub fn increment(&self) {
        self.inner.fetch_add(1, Ordering::Relaxed);
    }

    /// Current number of recorded queries
    pub fn get(&self) -> u64 {
        self.inner.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_counter_shared_between_clones() {
        let counter = QueryCounter::new();
        let handle = counter.clone();

        handle.increment();
        handle.increment();
        counter.increment();

        assert_eq!(counter.get(), 3);
        assert_eq!(handle.get(), 3);
    }

    #[test]
    fn test_query_counter_concurrent_increments() {
        let counter = QueryCounter::new();

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let c = counter.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        c.increment();
                    }
                })
            })
            .collect();

        for w in workers {
            w.join().unwrap();
        }

        assert_eq!(counter.get(), 1000);
    }

    #[test]
    fn test_record_preserves_field_order() {
        let record: Record = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
