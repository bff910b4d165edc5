//! Route path normalization.
//!
//! - Lookup key: leading `/`, no trailing `/` (except root), no query/fragment
//! - Suffix: the `?query#fragment` tail, carried through translation untouched
//! - Never percent-decodes: parameter values must round-trip byte for byte

use std::fmt;

/// A path split into its lookup key and its query/fragment suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath {
    key: String,
    suffix: String,
}

impl RoutePath {
    /// Normalize any user or browser supplied path.
    ///
    /// ```text
    /// "/nosotros/"                  -> key "/nosotros"
    /// "nosotros?ref=nav"            -> key "/nosotros", suffix "?ref=nav"
    /// "https://x.com/blog/a#top"    -> key "/blog/a",   suffix "#top"
    /// ""                            -> key "/"
    /// ```
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let stripped = strip_origin(trimmed);
        let trimmed = stripped.as_deref().unwrap_or(trimmed);

        let (path, suffix) = match trimmed.find(['?', '#']) {
            Some(idx) => trimmed.split_at(idx),
            None => (trimmed, ""),
        };

        Self {
            key: normalize_key(path),
            suffix: suffix.to_string(),
        }
    }

    /// Normalized lookup key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Query and fragment tail, including the leading `?` or `#`.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Re-attach this path's suffix to another path.
    pub fn with_suffix(&self, path: &str) -> String {
        if self.suffix.is_empty() {
            path.to_string()
        } else {
            format!("{}{}", path, self.suffix)
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key, self.suffix)
    }
}

/// Reduce an absolute `http(s)` URL to path + query + fragment.
///
/// `Url` lowercases scheme and host and drops userinfo and port; existing
/// `%XX` escapes in the path are kept as typed.
fn strip_origin(input: &str) -> Option<String> {
    if !input.contains("://") {
        return None;
    }
    let parsed = url::Url::parse(input).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }

    let mut rest = parsed.path().to_string();
    if let Some(query) = parsed.query() {
        rest.push('?');
        rest.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        rest.push('#');
        rest.push_str(fragment);
    }
    Some(rest)
}

fn normalize_key(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }

    let with_leading = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    match with_leading.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => with_leading,
    }
}
