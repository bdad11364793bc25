//! Token substitution for connector properties and entity attributes
//!
//! Handles `{{ variable }}` interpolation in property values before they are
//! used. Supports nested access like `{{ vars.window.since }}`; bare names
//! such as `{{ since }}` look in the same variables. Unknown tokens are left
//! in place.
//!
//! The data source only needs the [`TokenResolver`] seam; [`TemplateContext`]
//! is the implementation the CLI and tests use.

use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable.path }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)\s*\}\}")
        .expect("template regex is valid")
});

/// Replaces tokens in raw property or attribute values
pub trait TokenResolver: Send + Sync {
    /// Substitute every known token in `expr`
    fn replace_tokens(&self, expr: &str) -> String;
}

/// Resolver that returns values untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTokens;

impl TokenResolver for NoTokens {
    fn replace_tokens(&self, expr: &str) -> String {
        expr.to_string()
    }
}

/// Context for template interpolation
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    /// Context variables
    pub vars: Value,
}

impl TemplateContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context with additional variables
    pub fn with_vars(vars: Value) -> Self {
        Self { vars }
    }

    /// Set a single variable, creating the vars object if needed
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        if !self.vars.is_object() {
            self.vars = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(map) = &mut self.vars {
            map.insert(name.into(), value.into());
        }
        self
    }

    /// Get a value by path (e.g., "vars.since" or "since")
    pub fn get(&self, path: &str) -> Option<&Value> {
        let parts: Vec<&str> = path.split('.').collect();
        match parts.as_slice() {
            ["vars"] => Some(&self.vars),
            ["vars", rest @ ..] => get_nested_value(&self.vars, rest),
            _ => get_nested_value(&self.vars, &parts),
        }
    }
}

impl TokenResolver for TemplateContext {
    fn replace_tokens(&self, expr: &str) -> String {
        render_optional(expr, self)
    }
}

/// Get a nested value from a JSON value by path
fn get_nested_value<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for part in path {
        match current {
            Value::Object(map) => {
                current = map.get(*part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Render a template, leaving undefined variables as-is
pub fn render_optional(template: &str, ctx: &TemplateContext) -> String {
    TEMPLATE_REGEX
        .replace_all(template, |cap: &Captures<'_>| match ctx.get(&cap[1]) {
            Some(value) => value_to_string(value),
            None => cap[0].to_string(),
        })
        .into_owned()
}

/// Convert a JSON value to a string for template substitution
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // For complex types, use JSON serialization
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
