//! Route templates - static paths or one-parameter patterns.

use std::fmt;

use super::pattern::{PatternError, find_placeholder};

/// A canonical route template.
///
/// Identity is the template string itself for both kinds; a dynamic
/// template is never identified by one of its instantiated paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteTemplate {
    /// Parameterless path, e.g. `/about`.
    Static { path: String },
    /// Path with one placeholder, e.g. `/blog/:slug`.
    Dynamic {
        before: String,
        param: String,
        after: String,
    },
}

impl RouteTemplate {
    /// Classify a template string.
    ///
    /// ```text
    /// "/about"            -> Static  { path: "/about" }
    /// "/blog/:slug"       -> Dynamic { before: "/blog/", param: "slug", after: "" }
    /// "/blog/:a/:b"       -> Err(MultipleParams)
    /// ```
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        Ok(match find_placeholder(template)? {
            None => Self::Static {
                path: template.to_string(),
            },
            Some(p) => Self::Dynamic {
                before: p.before.to_string(),
                param: p.name.to_string(),
                after: p.after.to_string(),
            },
        })
    }

    #[inline]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic { .. })
    }

    /// Parameter name of a dynamic template.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::Static { .. } => None,
            Self::Dynamic { param, .. } => Some(param),
        }
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static { path } => f.write_str(path),
            Self::Dynamic {
                before,
                param,
                after,
            } => write!(f, "{before}:{param}{after}"),
        }
    }
}
