//! Connector configuration
//!
//! The data source is configured once from string properties supplied by the
//! host. Property values may contain tokens; they are resolved through a
//! [`TokenResolver`] before being interpreted.

use crate::error::{Error, Result};
use crate::template::TokenResolver;
use crate::types::StringMap;
use serde_yaml::Value as YamlValue;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Property holding the base URL relative queries are appended to
pub const BASE_URL: &str = "baseUrl";

/// Property holding the character encoding override
pub const ENCODING: &str = "encoding";

/// Property holding the connect timeout in milliseconds
pub const CONNECTION_TIMEOUT_FIELD_NAME: &str = "connectionTimeout";

/// Property holding the read timeout in milliseconds
pub const READ_TIMEOUT_FIELD_NAME: &str = "readTimeout";

/// Default connect timeout in milliseconds
pub const CONNECTION_TIMEOUT: u64 = 5000;

/// Default read timeout in milliseconds
pub const READ_TIMEOUT: u64 = 10000;

// ============================================================================
// Connector Config
// ============================================================================

/// Resolved, immutable connector options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Base URL relative queries are concatenated onto
    pub base_url: Option<String>,
    /// Character encoding applied to every page, overriding response headers
    pub encoding: Option<String>,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Read timeout
    pub read_timeout: Duration,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            encoding: None,
            connect_timeout: Duration::from_millis(CONNECTION_TIMEOUT),
            read_timeout: Duration::from_millis(READ_TIMEOUT),
        }
    }
}

impl ConnectorConfig {
    /// Create a new config builder
    pub fn builder() -> ConnectorConfigBuilder {
        ConnectorConfigBuilder::default()
    }

    /// Build the config from raw host properties.
    ///
    /// Every present property is passed through `resolver` first. Malformed
    /// timeouts are logged and replaced with the defaults.
    pub fn from_properties(props: &StringMap, resolver: &dyn TokenResolver) -> Self {
        let prop = |name: &str| props.get(name).map(|expr| resolver.replace_tokens(expr));

        let mut config = Self {
            base_url: prop(BASE_URL),
            encoding: prop(ENCODING),
            ..Self::default()
        };

        if let Some(raw) = prop(CONNECTION_TIMEOUT_FIELD_NAME) {
            match parse_timeout(&raw) {
                Some(timeout) => config.connect_timeout = timeout,
                None => warn!("Invalid connection timeout: {raw}"),
            }
        }

        if let Some(raw) = prop(READ_TIMEOUT_FIELD_NAME) {
            match parse_timeout(&raw) {
                Some(timeout) => config.read_timeout = timeout,
                None => warn!("Invalid read timeout: {raw}"),
            }
        }

        config
    }

    /// Connect timeout in milliseconds
    pub fn connect_timeout_ms(&self) -> u64 {
        self.connect_timeout.as_millis() as u64
    }

    /// Read timeout in milliseconds
    pub fn read_timeout_ms(&self) -> u64 {
        self.read_timeout.as_millis() as u64
    }
}

/// Parse a positive millisecond count
fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
        _ => None,
    }
}

/// Builder for connector config
#[derive(Default)]
pub struct ConnectorConfigBuilder {
    config: ConnectorConfig,
}

impl ConnectorConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the encoding override
    #[must_use]
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.config.encoding = Some(encoding.into());
        self
    }

    /// Set the connect timeout
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the read timeout
    #[must_use]
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = timeout;
        self
    }

    /// Build the config
    pub fn build(self) -> ConnectorConfig {
        self.config
    }
}

// ============================================================================
// Properties File
// ============================================================================

/// Load connector properties from a YAML mapping file.
///
/// Scalar values are kept as their string form, so `readTimeout: 2000` and
/// `readTimeout: "2000"` are equivalent.
pub fn load_properties(path: impl AsRef<Path>) -> Result<StringMap> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    parse_properties(&content)
}

/// Parse connector properties from a YAML mapping
pub fn parse_properties(content: &str) -> Result<StringMap> {
    let value: YamlValue = serde_yaml::from_str(content)?;

    let mapping = match value {
        YamlValue::Mapping(mapping) => mapping,
        YamlValue::Null => return Ok(StringMap::new()),
        _ => return Err(Error::config("properties must be a YAML mapping")),
    };

    let mut props = StringMap::new();
    for (key, value) in mapping {
        let key = scalar_to_string(&key)
            .ok_or_else(|| Error::config("property names must be scalars"))?;
        // Null means "not set"
        if value.is_null() {
            continue;
        }
        let value = scalar_to_string(&value).ok_or_else(|| Error::InvalidConfigValue {
            field: key.clone(),
            message: "expected a scalar value".to_string(),
        })?;
        props.insert(key, value);
    }

    Ok(props)
}

fn scalar_to_string(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
