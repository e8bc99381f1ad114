//! Resource path classification and normalization.
//!
//! A caller path is one of three things: an ordinary resource path, a
//! fully-qualified foreign URL destined for the web-proxy feature, or that
//! same foreign URL already percent-encoded by the caller. The three cases
//! get different encoding treatment, so classification is an explicit enum
//! rather than inline prefix branching.

use crate::encoding;

/// How a raw caller path is treated during sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Ordinary resource path.
    Plain,
    /// Unencoded `http://` or `https://` foreign URL.
    ProxyPlain,
    /// Caller-encoded foreign URL (`http%3A` / `https%3A` prefix).
    ProxyEncoded,
}

impl PathKind {
    /// Classify a path whose leading `/` has already been stripped.
    pub fn classify(path: &str) -> Self {
        if path.starts_with("http://") || path.starts_with("https://") {
            return PathKind::ProxyPlain;
        }
        if has_encoded_scheme_prefix(path) {
            return PathKind::ProxyEncoded;
        }
        PathKind::Plain
    }
}

/// Matches `http%3A` / `https%3A`, accepting either case in the hex digits.
fn has_encoded_scheme_prefix(path: &str) -> bool {
    const PREFIXES: [&str; 2] = ["http%3A", "https%3A"];

    let bytes = path.as_bytes();
    PREFIXES.iter().any(|prefix| {
        bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    })
}

/// Normalize a raw path into the form placed directly before the query
/// string: exactly one leading `/`, everything after it canonically encoded.
///
/// Proxy URLs are component-encoded into a single opaque segment; already
/// encoded proxy URLs pass through untouched; plain paths get the looser
/// path encoding with `/` preserved. An empty input yields `/`.
pub fn sanitize_path(raw: &str) -> String {
    let stripped = raw.strip_prefix('/').unwrap_or(raw);

    match PathKind::classify(stripped) {
        PathKind::ProxyPlain => format!("/{}", encoding::encode_component(stripped)),
        PathKind::ProxyEncoded => format!("/{}", stripped),
        PathKind::Plain => format!("/{}", encoding::encode_path(stripped)),
    }
}
