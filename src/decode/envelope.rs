//! Page envelope decoding

use crate::error::{Error, Result};
use crate::http::decode_body;
use crate::types::{JsonObject, JsonValue, Records};
use serde::Deserialize;

/// Name of the link that points at the following page
pub const NEXT_LINK: &str = "next";

/// One decoded page: its records and its pagination links
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageEnvelope {
    /// Records on this page, in server order
    pub data: Records,
    /// Link name to link value
    pub links: JsonObject,
}

impl PageEnvelope {
    /// Parse a page from already decoded text
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| Error::decode(format!("Failed to parse page envelope: {e}")))
    }

    /// Resolve a link by name.
    ///
    /// A link may be a URL string, `null`, or a JSON:API link object with an
    /// `href` member. Absent and `null` both mean "no link".
    pub fn link(&self, name: &str) -> Result<Option<&str>> {
        match self.links.get(name) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::String(url)) => Ok(Some(url.as_str())),
            Some(JsonValue::Object(obj)) => match obj.get("href") {
                None | Some(JsonValue::Null) => Ok(None),
                Some(JsonValue::String(url)) => Ok(Some(url.as_str())),
                Some(other) => Err(Error::decode(format!(
                    "link '{name}' has a non-string href: {other}"
                ))),
            },
            Some(other) => Err(Error::decode(format!(
                "link '{name}' must be a string, null or link object, got {other}"
            ))),
        }
    }

    /// URL of the next page, if any
    pub fn next_link(&self) -> Result<Option<&str>> {
        self.link(NEXT_LINK)
    }

    /// Take the records out of this page
    pub fn into_records(self) -> Records {
        self.data
    }
}

/// Decode a raw page body with the given charset label
pub fn decode_envelope(body: &[u8], charset: &str) -> Result<PageEnvelope> {
    let text = decode_body(body, charset)?;
    PageEnvelope::parse(&text)
}
