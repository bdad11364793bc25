//! Charset resolution and body decoding

use crate::error::{Error, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Charset used when neither an override nor a header names one
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Everything after the first `charset=`, verbatim
static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)charset=(.*)$").expect("charset regex is valid"));

/// Labels that name ISO-8859-1 proper, not the windows-1252 superset
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso8859_1",
    "iso_8859_1",
    "8859_1",
    "latin1",
    "l1",
    "cp819",
    "ibm819",
    "csisolatin1",
    "iso-ir-100",
];

/// Where a page's charset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetSource {
    /// Configured encoding override
    Override,
    /// `charset=` parameter of the `Content-Type` header
    Header,
    /// Nothing specified, UTF-8 assumed
    Default,
}

/// Extract the `charset=` value from a `Content-Type` header.
///
/// No quote stripping and no trimming of trailing attributes.
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    CHARSET_REGEX
        .captures(content_type)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Pick the charset label for one page
pub fn resolve_charset<'a>(
    configured: Option<&'a str>,
    content_type: Option<&'a str>,
) -> (&'a str, CharsetSource) {
    if let Some(label) = configured {
        return (label, CharsetSource::Override);
    }
    if let Some(label) = content_type.and_then(charset_from_content_type) {
        return (label, CharsetSource::Header);
    }
    (DEFAULT_CHARSET, CharsetSource::Default)
}

/// Look up an encoding by label
pub fn lookup_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::unsupported_encoding(label))
}

/// Whether a label names ISO-8859-1
pub fn is_latin1_label(label: &str) -> bool {
    let label = label.trim();
    LATIN1_LABELS
        .iter()
        .any(|alias| alias.eq_ignore_ascii_case(label))
}

/// Decode a body using the named charset.
///
/// A bare `UTF-16` label is big-endian unless a byte order mark says
/// otherwise. ISO-8859-1 maps every byte to the code point of the same
/// value. Malformed sequences become U+FFFD.
pub fn decode_body<'a>(body: &'a [u8], label: &str) -> Result<Cow<'a, str>> {
    if is_latin1_label(label) {
        return Ok(Cow::Owned(body.iter().copied().map(char::from).collect()));
    }

    if label.trim().eq_ignore_ascii_case("utf-16") {
        let encoding = match Encoding::for_bom(body) {
            Some((enc, _)) if enc == UTF_16LE => UTF_16LE,
            _ => UTF_16BE,
        };
        let (text, _) = encoding.decode_with_bom_removal(body);
        return Ok(text);
    }

    let encoding = lookup_encoding(label)?;
    let (text, _) = encoding.decode_with_bom_removal(body);
    Ok(text)
}
