//! Entity processor types

use crate::template::{NoTokens, TokenResolver};
use crate::types::{Record, StringMap};
use std::sync::Arc;

/// Produces rows for the downstream import driver
pub trait RowProducible {
    /// Next row, or `None` when there are no more
    fn next_row(&mut self) -> Option<Record>;
}

/// Attributes of one entity plus the resolver for their tokens
#[derive(Clone)]
pub struct EntityContext {
    attributes: StringMap,
    resolver: Arc<dyn TokenResolver>,
}

impl EntityContext {
    /// Create a context whose attributes are used without substitution
    pub fn new(attributes: StringMap) -> Self {
        Self {
            attributes,
            resolver: Arc::new(NoTokens),
        }
    }

    /// Create a context that substitutes tokens with `resolver`
    pub fn with_resolver(attributes: StringMap, resolver: Arc<dyn TokenResolver>) -> Self {
        Self {
            attributes,
            resolver,
        }
    }

    /// Set an attribute
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Raw attribute value
    pub fn raw_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value with tokens substituted
    pub fn resolved_attribute(&self, name: &str) -> Option<String> {
        self.raw_attribute(name)
            .map(|expr| self.resolver.replace_tokens(expr))
    }
}

impl std::fmt::Debug for EntityContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityContext")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}
