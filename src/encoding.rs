//! Percent and base64 encoders for URL components.
//!
//! Two percent-encoding rule sets are in play. The component encoder covers
//! query keys, query values, and proxied foreign URLs: it escapes every
//! reserved character (space as `%20`, never `+`) while keeping the
//! unreserved set plus `!'()*` verbatim. The path encoder is much looser:
//! plain resource paths only need `: ? # + space` escaped, and the `/`
//! delimiter must survive untouched.
//!
//! Values for `*64` parameter keys use URL-safe base64 without padding
//! instead of percent-encoding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Escapes everything except ASCII alphanumerics, `-_.~` and `!'()*`.
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Path segments only escape `: ? # + space` (controls and non-ASCII bytes
/// are always escaped).
const PATH_SEGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b':')
    .add(b'?')
    .add(b'#')
    .add(b'+');

/// Percent-encode a query component. Output hex digits are upper-case.
pub fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT_SET).to_string()
}

/// Percent-encode a plain resource path, segment by segment.
///
/// The path is split on `/`, each segment is encoded independently, and the
/// segments are rejoined, so the delimiter itself is never escaped.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_SET).to_string()
}

/// URL-safe base64 of the UTF-8 bytes: `+` → `-`, `/` → `_`, no padding.
pub fn encode_base64url(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}

/// Decode a percent-encoded component, treating `+` as space.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; the decoder
/// only exists to check round-trip idempotence of already-canonical input.
pub fn decode_component(component: &str) -> String {
    let with_spaces = component.replace('+', " ");
    percent_decode_str(&with_spaces)
        .decode_utf8_lossy()
        .into_owned()
}
