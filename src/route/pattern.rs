//! Single-parameter path patterns.
//!
//! A template like `/noticias/:slug` compiles to an anchored matcher
//! (`^/noticias/([^/]+)$`) and a generator (`/noticias/{value}`). Every
//! literal character is regex-escaped, so `/v1.0/:id` never matches `/v1x0/7`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Placeholder syntax: `:name`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("placeholder regex"));

/// Errors raised while compiling a template.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("template `{template}` has {count} parameters, at most one is supported")]
    MultipleParams { template: String, count: usize },

    #[error("template `{template}` must use parameter `:{expected}`")]
    ParamMismatch { template: String, expected: String },

    #[error("template `{template}` translates a static route and cannot have a parameter")]
    UnexpectedParam { template: String },

    #[error("template `{template}` compiled to an invalid matcher")]
    Regex {
        template: String,
        #[source]
        source: regex::Error,
    },
}

/// A located placeholder in a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Text before the `:`.
    pub before: &'a str,
    /// Parameter name without `:`.
    pub name: &'a str,
    /// Text after the name.
    pub after: &'a str,
}

/// Find the single placeholder of a template.
///
/// Returns `Ok(None)` for static templates.
pub fn find_placeholder(template: &str) -> Result<Option<Placeholder<'_>>, PatternError> {
    let mut found = PLACEHOLDER.captures_iter(template);
    let Some(first) = found.next() else {
        return Ok(None);
    };

    let rest = found.count();
    if rest > 0 {
        return Err(PatternError::MultipleParams {
            template: template.to_string(),
            count: rest + 1,
        });
    }

    let whole = first.get(0).map_or(0..0, |m| m.range());
    let name = first.get(1).map_or("", |m| m.as_str());
    Ok(Some(Placeholder {
        before: &template[..whole.start],
        name,
        after: &template[whole.end..],
    }))
}

/// Compiled matcher/generator pair for a one-parameter template.
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    before: String,
    param: String,
    after: String,
    regex: Regex,
}

impl PathPattern {
    /// Compile a template that must contain exactly one placeholder named `param`.
    pub fn compile(template: &str, param: &str) -> Result<Self, PatternError> {
        let mismatch = || PatternError::ParamMismatch {
            template: template.to_string(),
            expected: param.to_string(),
        };

        let placeholder = find_placeholder(template)?.ok_or_else(mismatch)?;
        if placeholder.name != param {
            return Err(mismatch());
        }

        let source = format!(
            "^{}([^/]+){}$",
            regex::escape(placeholder.before),
            regex::escape(placeholder.after)
        );
        let regex = Regex::new(&source).map_err(|source| PatternError::Regex {
            template: template.to_string(),
            source,
        })?;

        Ok(Self {
            template: template.to_string(),
            before: placeholder.before.to_string(),
            param: param.to_string(),
            after: placeholder.after.to_string(),
            regex,
        })
    }

    /// Match a whole path, returning the captured parameter value.
    pub fn captures<'p>(&self, path: &'p str) -> Option<&'p str> {
        self.regex
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Substitute a value for the placeholder.
    pub fn render(&self, value: &str) -> String {
        let mut out = String::with_capacity(self.before.len() + value.len() + self.after.len());
        out.push_str(&self.before);
        out.push_str(value);
        out.push_str(&self.after);
        out
    }

    /// Render with the parameter re-expressed as `:name`.
    #[inline]
    pub fn generic(&self) -> String {
        self.render(&format!(":{}", self.param))
    }

    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[inline]
    pub fn param(&self) -> &str {
        &self.param
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.template == other.template
    }
}

impl Eq for PathPattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_placeholder_static() {
        assert_eq!(find_placeholder("/about").unwrap(), None);
        assert_eq!(find_placeholder("/").unwrap(), None);
    }

    #[test]
    fn test_find_placeholder_dynamic() {
        let found = find_placeholder("/blog/:slug").unwrap().unwrap();
        assert_eq!(found.before, "/blog/");
        assert_eq!(found.name, "slug");
        assert_eq!(found.after, "");

        let found = find_placeholder("/gallery/:id/photos").unwrap().unwrap();
        assert_eq!(found.before, "/gallery/");
        assert_eq!(found.name, "id");
        assert_eq!(found.after, "/photos");
    }

    #[test]
    fn test_find_placeholder_multiple() {
        let err = find_placeholder("/blog/:year/:slug").unwrap_err();
        assert!(matches!(err, PatternError::MultipleParams { count: 2, .. }));
    }

    #[test]
    fn test_captures_one_segment() {
        let pattern = PathPattern::compile("/noticias/:slug", "slug").unwrap();
        assert_eq!(pattern.captures("/noticias/iso-9001-update"), Some("iso-9001-update"));
        assert_eq!(pattern.captures("/noticias/a/b"), None);
        assert_eq!(pattern.captures("/noticias/"), None);
        assert_eq!(pattern.captures("/noticias"), None);
    }

    #[test]
    fn test_anchored() {
        let pattern = PathPattern::compile("/blog/:slug", "slug").unwrap();
        assert_eq!(pattern.captures("/en/blog/post"), None);
        assert_eq!(pattern.captures("/blog/post/extra"), None);
    }

    #[test]
    fn test_literals_escaped() {
        let pattern = PathPattern::compile("/v1.0/docs+(x)/:id", "id").unwrap();
        assert_eq!(pattern.captures("/v1.0/docs+(x)/42"), Some("42"));
        assert_eq!(pattern.captures("/v1x0/docs+(x)/42"), None);
        assert_eq!(pattern.captures("/v1.0/docsx/42"), None);
    }

    #[test]
    fn test_partial_segment_placeholder() {
        let pattern = PathPattern::compile("/post-:slug.html", "slug").unwrap();
        assert_eq!(pattern.captures("/post-hello.html"), Some("hello"));
        assert_eq!(pattern.render("hello"), "/post-hello.html");
    }

    #[test]
    fn test_percent_encoded_value() {
        let pattern = PathPattern::compile("/blog/:slug", "slug").unwrap();
        let value = pattern.captures("/blog/caf%C3%A9-2024").unwrap();
        assert_eq!(value, "caf%C3%A9-2024");
        assert_eq!(pattern.render(value), "/blog/caf%C3%A9-2024");
    }

    #[test]
    fn test_render_and_generic() {
        let pattern = PathPattern::compile("/galeria/:id", "id").unwrap();
        assert_eq!(pattern.render("12"), "/galeria/12");
        assert_eq!(pattern.generic(), "/galeria/:id");
        assert_eq!(pattern.to_string(), "/galeria/:id");
    }

    #[test]
    fn test_param_mismatch() {
        let err = PathPattern::compile("/noticias/:id", "slug").unwrap_err();
        assert!(matches!(err, PatternError::ParamMismatch { .. }));

        let err = PathPattern::compile("/noticias", "slug").unwrap_err();
        assert!(matches!(err, PatternError::ParamMismatch { .. }));
    }
}
