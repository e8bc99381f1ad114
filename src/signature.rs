//! Request signing.
//!
//! The signature is an MD5 digest over `sign_key + path + "?" + query`
//! (the `?` and query are omitted when the query is empty), rendered as 32
//! lowercase hex characters and appended as the `s=` parameter. MD5 is the
//! digest the verifying servers compute; it is an interoperability constant
//! here, not a security mechanism, and must not be swapped for another
//! algorithm.

use md5::{Digest, Md5};

use crate::constants::SIGNATURE_PARAM_KEY;

/// Compute the signature value for a sanitized path and canonical query.
pub fn sign(sign_key: &str, path: &str, query: &str) -> String {
    let mut to_sign = String::with_capacity(sign_key.len() + path.len() + query.len() + 1);
    to_sign.push_str(sign_key);
    to_sign.push_str(path);
    if !query.is_empty() {
        to_sign.push('?');
        to_sign.push_str(query);
    }

    md5_hex(to_sign.as_bytes())
}

/// Append `s=<signature>` to a canonical query, returning the final query.
///
/// The signature becomes the sole parameter when the query is empty.
pub fn signed_query(sign_key: &str, path: &str, query: &str) -> String {
    let signature = sign(sign_key, path, query);

    if query.is_empty() {
        format!("{}={}", SIGNATURE_PARAM_KEY, signature)
    } else {
        format!("{}&{}={}", query, SIGNATURE_PARAM_KEY, signature)
    }
}

fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
