//! Final URL assembly.

/// Compose `scheme://host{path}?{query}`, stripping a trailing bare `?` or
/// `#`.
///
/// No escaping happens here. The path and query arrive already canonical;
/// re-encoding at this stage would invalidate a previously computed
/// signature.
pub fn assemble(scheme: &str, host: &str, path: &str, query: &str) -> String {
    let mut url = format!("{}://{}{}?{}", scheme, host, path, query);

    if url.ends_with('#') {
        url.pop();
    }
    if url.ends_with('?') {
        url.pop();
    }

    url
}
