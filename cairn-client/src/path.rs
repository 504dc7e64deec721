//! Path normalization for query variables.
//!
//! Paths arriving from user navigation can carry a query string, a URL
//! fragment, or a trailing slash; the catalogue API matches none of
//! those. Sanitization happens on every request that carries a `path`
//! variable, so callers can pass paths straight from the address bar.

use serde_json::{Map, Value};

/// Normalizes a catalogue path.
///
/// Takes the substring before the first `?`, then before the first `#`,
/// then strips exactly one trailing `/`. No other characters are touched
/// (no percent-decoding, no case changes), so the function is idempotent
/// and borrows from its input. Never fails; empty and already-clean paths
/// come back unchanged.
#[must_use]
pub fn sanitize_path(path: &str) -> &str {
    let path = path.split_once('?').map_or(path, |(head, _)| head);
    let path = path.split_once('#').map_or(path, |(head, _)| head);
    path.strip_suffix('/').unwrap_or(path)
}

/// Applies [`sanitize_path`] to the `path` entry of a variable mapping.
///
/// Mappings without a string-valued `path` key pass through untouched.
pub fn sanitize_path_variable(variables: &mut Map<String, Value>) {
    let clean = match variables.get("path") {
        Some(Value::String(path)) => {
            let clean = sanitize_path(path);
            if clean.len() == path.len() {
                return;
            }
            Value::String(clean.to_owned())
        }
        _ => return,
    };

    variables.insert("path".to_owned(), clean);
}
