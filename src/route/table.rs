//! Static and dynamic route tables.
//!
//! Both tables are plain declarative data: canonical template -> localized
//! template per language. They are built once from [`RouteDecl`]s and read
//! only afterwards.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pattern::{PathPattern, PatternError, find_placeholder};
use super::template::RouteTemplate;
use crate::core::Language;

// ============================================================================
// Declarations
// ============================================================================

/// One declared route, as written in source or in `localroute.toml`.
///
/// ```toml
/// [[routes]]
/// path = "/about"
/// es = "/nosotros"
/// fr = "/a-propos"
/// ```
///
/// Every key besides `path` must be a language code. An unrecognized key
/// is a parse error, not an ignored field: a mistyped code would otherwise
/// silently drop a spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecl {
    /// Canonical template.
    pub path: String,

    /// Localized templates keyed by language code.
    #[serde(flatten)]
    pub translations: BTreeMap<Language, String>,
}

impl RouteDecl {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            translations: BTreeMap::new(),
        }
    }

    /// Add a localized spelling.
    pub fn with(mut self, lang: Language, path: impl Into<String>) -> Self {
        self.translations.insert(lang, path.into());
        self
    }
}

/// A declared route whose templates could not be compiled.
#[derive(Debug, Error)]
#[error("invalid route `{route}`")]
pub struct TableError {
    pub route: String,
    #[source]
    pub source: PatternError,
}

// ============================================================================
// Entries
// ============================================================================

/// Translation entry of a parameterless page.
#[derive(Debug, Clone)]
pub struct StaticEntry {
    canonical: Arc<str>,
    /// Always holds the canonical language.
    paths: BTreeMap<Language, String>,
}

impl StaticEntry {
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Shared handle to the canonical template.
    #[inline]
    pub fn canonical_arc(&self) -> &Arc<str> {
        &self.canonical
    }

    /// Localized path, falling back to the canonical path.
    pub fn path(&self, lang: Language) -> &str {
        self.paths
            .get(&lang)
            .map_or(self.canonical.as_ref(), String::as_str)
    }

    /// Localized path only if one was declared (or implied for canonical).
    pub fn declared(&self, lang: Language) -> Option<&str> {
        self.paths.get(&lang).map(String::as_str)
    }
}

/// Translation entry of a one-parameter page.
#[derive(Debug, Clone)]
pub struct DynamicEntry {
    canonical: Arc<str>,
    /// Compiled canonical template.
    base: PathPattern,
    /// Declared localized patterns.
    patterns: BTreeMap<Language, PathPattern>,
}

impl DynamicEntry {
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Shared handle to the canonical template.
    #[inline]
    pub fn canonical_arc(&self) -> &Arc<str> {
        &self.canonical
    }

    /// Localized pattern, falling back to the canonical pattern.
    pub fn pattern(&self, lang: Language) -> &PathPattern {
        self.patterns.get(&lang).unwrap_or(&self.base)
    }

    /// Localized pattern only if one was declared (or implied for canonical).
    pub fn declared(&self, lang: Language) -> Option<&PathPattern> {
        match self.patterns.get(&lang) {
            Some(pattern) => Some(pattern),
            None if lang.is_canonical() => Some(&self.base),
            None => None,
        }
    }

    /// Parameter name shared by every language.
    #[inline]
    pub fn param(&self) -> &str {
        self.base.param()
    }
}

// ============================================================================
// Tables
// ============================================================================

/// Parameterless routes in declaration order.
#[derive(Debug, Clone, Default)]
pub struct StaticTable {
    entries: Vec<StaticEntry>,
}

impl StaticTable {
    pub fn get(&self, canonical: &str) -> Option<&StaticEntry> {
        self.entries.iter().find(|e| &*e.canonical == canonical)
    }

    #[inline]
    pub fn entries(&self) -> &[StaticEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One-parameter routes in declaration order.
#[derive(Debug, Clone, Default)]
pub struct DynamicTable {
    entries: Vec<DynamicEntry>,
}

impl DynamicTable {
    pub fn get(&self, canonical: &str) -> Option<&DynamicEntry> {
        self.entries.iter().find(|e| &*e.canonical == canonical)
    }

    #[inline]
    pub fn entries(&self) -> &[DynamicEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both route tables, plus the declarations they were built from.
#[derive(Debug, Clone, Default)]
pub struct RouteTables {
    pub statics: StaticTable,
    pub dynamics: DynamicTable,
    decls: Vec<RouteDecl>,
}

impl RouteTables {
    /// Classify and compile declared routes.
    ///
    /// Fails only when a template cannot be compiled (two parameters, or a
    /// localized template whose parameter differs from the canonical one).
    /// Invariants such as uniqueness are checked by [`RouteTables::validate`].
    pub fn from_routes(routes: impl IntoIterator<Item = RouteDecl>) -> Result<Self, TableError> {
        let mut tables = Self::default();

        for decl in routes {
            let invalid = |source| TableError {
                route: decl.path.clone(),
                source,
            };

            match RouteTemplate::parse(&decl.path).map_err(invalid)? {
                RouteTemplate::Static { path } => {
                    let entry = static_entry(path, &decl).map_err(invalid)?;
                    tables.statics.entries.push(entry);
                }
                RouteTemplate::Dynamic { param, .. } => {
                    let entry = dynamic_entry(&param, &decl).map_err(invalid)?;
                    tables.dynamics.entries.push(entry);
                }
            }
            tables.decls.push(decl);
        }

        Ok(tables)
    }

    /// Declarations in their original order.
    #[inline]
    pub fn decls(&self) -> &[RouteDecl] {
        &self.decls
    }

    /// Total number of routes.
    pub fn len(&self) -> usize {
        self.statics.len() + self.dynamics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statics.is_empty() && self.dynamics.is_empty()
    }
}

fn static_entry(canonical: String, decl: &RouteDecl) -> Result<StaticEntry, PatternError> {
    let mut paths = BTreeMap::new();
    paths.insert(Language::CANONICAL, canonical.clone());

    for (&lang, path) in &decl.translations {
        // A localized spelling of a static page must stay static
        if find_placeholder(path)?.is_some() {
            return Err(PatternError::UnexpectedParam {
                template: path.clone(),
            });
        }
        paths.insert(lang, path.clone());
    }

    Ok(StaticEntry {
        canonical: Arc::from(canonical),
        paths,
    })
}

fn dynamic_entry(param: &str, decl: &RouteDecl) -> Result<DynamicEntry, PatternError> {
    let base = PathPattern::compile(&decl.path, param)?;
    let mut patterns = BTreeMap::new();

    for (&lang, template) in &decl.translations {
        patterns.insert(lang, PathPattern::compile(template, param)?);
    }

    Ok(DynamicEntry {
        canonical: Arc::from(decl.path.as_str()),
        base,
        patterns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> RouteTables {
        RouteTables::from_routes([
            RouteDecl::new("/about")
                .with(Language::Es, "/nosotros")
                .with(Language::Fr, "/a-propos"),
            RouteDecl::new("/blog/:slug").with(Language::Es, "/noticias/:slug"),
            RouteDecl::new("/contact").with(Language::Es, "/contacto"),
        ])
        .unwrap()
    }

    #[test]
    fn test_classification_keeps_order() {
        let tables = tables();
        assert_eq!(tables.statics.len(), 2);
        assert_eq!(tables.dynamics.len(), 1);
        assert_eq!(tables.len(), 3);
        assert_eq!(tables.statics.entries()[0].canonical(), "/about");
        assert_eq!(tables.statics.entries()[1].canonical(), "/contact");
        assert_eq!(tables.decls().len(), 3);
    }

    #[test]
    fn test_static_entry_self_identity_filled() {
        let tables = tables();
        let about = tables.statics.get("/about").unwrap();
        assert_eq!(about.path(Language::En), "/about");
        assert_eq!(about.path(Language::Es), "/nosotros");
        assert_eq!(about.path(Language::Fr), "/a-propos");
    }

    #[test]
    fn test_static_entry_missing_language_falls_back() {
        let tables = tables();
        let contact = tables.statics.get("/contact").unwrap();
        assert_eq!(contact.path(Language::Fr), "/contact");
        assert_eq!(contact.declared(Language::Fr), None);
        assert_eq!(contact.declared(Language::En), Some("/contact"));
    }

    #[test]
    fn test_dynamic_entry_patterns() {
        let tables = tables();
        let blog = tables.dynamics.get("/blog/:slug").unwrap();
        assert_eq!(blog.param(), "slug");
        assert_eq!(blog.pattern(Language::Es).render("x"), "/noticias/x");
        // fr is not declared: canonical pattern
        assert_eq!(blog.pattern(Language::Fr).render("x"), "/blog/x");
        assert!(blog.declared(Language::Fr).is_none());
    }

    #[test]
    fn test_param_mismatch_rejected() {
        let err = RouteTables::from_routes([
            RouteDecl::new("/blog/:slug").with(Language::Es, "/noticias/:id")
        ])
        .unwrap_err();
        assert_eq!(err.route, "/blog/:slug");
        assert!(matches!(err.source, PatternError::ParamMismatch { .. }));
    }

    #[test]
    fn test_static_with_param_translation_rejected() {
        let result = RouteTables::from_routes([
            RouteDecl::new("/about").with(Language::Es, "/nosotros/:x")
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_two_params_rejected() {
        let result = RouteTables::from_routes([RouteDecl::new("/:a/:b")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decl_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            routes: Vec<RouteDecl>,
        }

        let doc: Doc = toml::from_str(
            r#"
            [[routes]]
            path = "/about"
            es = "/nosotros"
            fr = "/a-propos"
            "#,
        )
        .unwrap();
        assert_eq!(doc.routes[0].path, "/about");
        assert_eq!(doc.routes[0].translations[&Language::Es], "/nosotros");
        assert_eq!(doc.routes[0].translations.len(), 2);
    }

    #[test]
    fn test_decl_unknown_language_rejected() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Doc {
            routes: Vec<RouteDecl>,
        }

        let result: Result<Doc, _> = toml::from_str(
            r#"
            [[routes]]
            path = "/about"
            de = "/ueber-uns"
            "#,
        );
        assert!(result.is_err());
    }
}
