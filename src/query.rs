//! Canonical query-string construction.
//!
//! The canonical form is the single source of truth for both the visible
//! query and the signing input, so parameter handling is deliberately
//! rigid: keys ascending byte-wise, empty values dropped, exactly one
//! encoding per key shape.

use std::collections::{BTreeMap, HashMap};

use crate::encoding;

/// Render a parameter map as the canonical query string.
///
/// Keys are visited in ascending lexicographic order, making the output
/// independent of the map's insertion order. A parameter with an empty
/// value is treated as deleted and never emitted. Values for keys whose
/// *encoded* form ends in `64` (e.g. `txt64`, `mark64`) are base64url
/// encoded; all other values go through the component encoder.
pub fn canonical_query(params: &HashMap<String, String>) -> String {
    let sorted: BTreeMap<&str, &str> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    let mut pairs = Vec::with_capacity(sorted.len());
    for (key, value) in sorted {
        let encoded_key = encoding::encode_component(key);
        let encoded_value = if encoded_key.ends_with("64") {
            encoding::encode_base64url(value)
        } else {
            encoding::encode_component(value)
        };
        pairs.push(format!("{}={}", encoded_key, encoded_value));
    }

    pairs.join("&")
}
