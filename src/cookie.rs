//! The cookie pair type and the cookie-string codec.
//!
//! A document exposes all its cookies as one string: `name=value` segments
//! joined by `"; "`. This module parses that shape back into [`Cookie`]
//! pairs, looks up single names, and percent-encodes and decodes values
//! the way `encodeURIComponent` does.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single name/value pair as reported by the host document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name (case-sensitive).
    pub name: String,
    /// Cookie value, percent-decoded.
    pub value: String,
}

/// Splits a raw cookie string into pairs, in the order the host reports
/// them. Empty names and values are kept as `""`; whitespace-only segments
/// (and the empty string) contribute nothing. A segment with no `=` is a
/// nameless cookie's value.
pub(crate) fn parse_cookie_string(raw: &str) -> Vec<Cookie> {
    raw.split(';')
        .filter_map(|segment| {
            let segment = segment.trim();
            if segment.is_empty() {
                return None;
            }
            let (name, value) = match segment.split_once('=') {
                Some((name, value)) => (name, value),
                None => ("", segment),
            };
            Some(Cookie {
                name: decode_value(name).into_owned(),
                value: decode_value(value).into_owned(),
            })
        })
        .collect()
}

/// Looks up `name` in a raw cookie string by literal segment-prefix
/// comparison and returns its percent-decoded value. The first matching
/// segment wins; `.` or any other metacharacter in `name` has no special
/// meaning.
pub(crate) fn find_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|segment| {
        let value = segment.trim().strip_prefix(name)?.strip_prefix('=')?;
        Some(decode_value(value).into_owned())
    })
}

/// Percent-encodes a value for the wire, matching `encodeURIComponent`.
pub(crate) fn encode_value(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Percent-decodes a value read from the wire. Malformed escapes pass
/// through unchanged: the read path has no error channel.
pub(crate) fn decode_value(value: &str) -> Cow<'_, str> {
    urlencoding::decode(value).unwrap_or(Cow::Borrowed(value))
}
