//! HTTP module
//!
//! Issues one GET per page and works out which character encoding the page
//! body is in.
//!
//! # Features
//!
//! - **Timeouts**: separate connect and read timeouts, no retries
//! - **Charset resolution**: configured override, then `Content-Type`, then UTF-8

mod client;
mod encoding;

pub use client::{HttpClient, PageResponse, UNREADABLE_BODY};
pub use encoding::{
    charset_from_content_type, decode_body, is_latin1_label, lookup_encoding, resolve_charset,
    CharsetSource, DEFAULT_CHARSET,
};
