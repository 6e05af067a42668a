//! Object key resolution
//!
//! Joins an optional prefix with an object key, normalizing separators so
//! the resolved key never carries a doubled or leading slash, and derives
//! a default key from a local file path when no explicit key is given.

use std::path::Path;

/// Join an optional prefix and an object key.
///
/// Trailing slashes on the prefix and leading slashes on the key are
/// stripped so exactly one separator ends up between them. A prefix that
/// is empty or consists only of slashes contributes nothing; the key is
/// returned unchanged. Slashes embedded inside the key are preserved
/// verbatim.
pub fn join_key(prefix: Option<&str>, key: &str) -> String {
    let prefix = prefix.unwrap_or("").trim_end_matches('/');
    if prefix.is_empty() {
        return key.to_string();
    }

    format!("{prefix}/{}", key.trim_start_matches('/'))
}

/// Resolve the remote key for a transfer operation.
///
/// An explicit key wins; otherwise the base name of the local path (the
/// final segment after the last separator) is used. Either way the result
/// is joined with the prefix via [`join_key`].
pub fn resolve_key(prefix: Option<&str>, explicit_key: Option<&str>, local_path: &Path) -> String {
    let key = match explicit_key {
        Some(k) => k.to_string(),
        None => local_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    join_key(prefix, &key)
}

/// Strip a listing prefix from a returned key.
///
/// Listed keys come back fully qualified; output is printed relative to
/// the prefix the user asked for. Keys that do not start with the prefix
/// are returned unchanged.
pub fn strip_key_prefix<'a>(prefix: Option<&str>, key: &'a str) -> &'a str {
    match prefix {
        Some(p) if !p.is_empty() => key.strip_prefix(p).unwrap_or(key),
        _ => key,
    }
}
