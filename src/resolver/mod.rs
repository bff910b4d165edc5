//! Route resolution: canonical identity, translation and language detection.
//!
//! Every operation here is total. An unknown path is treated as already
//! canonical and already correctly localized, so a broken link never breaks
//! client-side navigation.
//!
//! # Example
//!
//! ```
//! use localroute::{Language, RouteResolver};
//!
//! let resolver = RouteResolver::builtin().unwrap();
//! assert_eq!(resolver.translate("/about", Language::Es), "/nosotros");
//! assert_eq!(resolver.detect_language("/nosotros"), Language::Es);
//! assert_eq!(resolver.resolve_canonical("/noticias/iso-9001").canonical, "/blog/iso-9001");
//! ```

mod index;

use std::sync::Arc;

pub use index::ReverseIndex;
use index::{Located, Target};

use crate::core::{Language, RoutePath};
use crate::debug;
use crate::route::{RouteTables, TableError};

/// How a path was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// Exact match on a static spelling.
    Static,
    /// Matched a dynamic pattern; carries the captured value.
    Dynamic { param: String },
    /// Not in any table; the input is taken as canonical.
    Unmapped,
}

/// Canonical identity of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Concrete canonical path (parameter substituted for dynamic routes).
    pub canonical: String,
    /// Canonical route template (`/blog/:slug`), or the input when unmapped.
    pub template: Arc<str>,
    /// Language the input path was spelled in.
    pub language: Language,
    pub kind: RouteKind,
}

impl Resolution {
    #[inline]
    pub const fn is_mapped(&self) -> bool {
        !matches!(self.kind, RouteKind::Unmapped)
    }
}

/// Resolver over immutable route tables.
///
/// Cheap to share: build once at startup and hand out `&RouteResolver`
/// (or wrap it in an `Arc`) to every component that builds links.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    tables: RouteTables,
    index: ReverseIndex,
}

impl RouteResolver {
    /// Build the reverse index for `tables`.
    pub fn new(tables: RouteTables) -> Self {
        let index = ReverseIndex::build(&tables);
        debug!("routes"; "indexed {} static spellings, {} dynamic matchers",
            index.static_len(), index.dynamic_len());
        Self { tables, index }
    }

    /// Resolver over the built-in site tables.
    pub fn builtin() -> Result<Self, TableError> {
        Ok(Self::new(RouteTables::builtin()?))
    }

    #[inline]
    pub fn tables(&self) -> &RouteTables {
        &self.tables
    }

    /// Strict lookup: `None` when the path is in no table.
    pub fn lookup(&self, path: &str) -> Option<Resolution> {
        let route = RoutePath::parse(path);
        let located = self.index.locate(&self.tables, route.key())?;
        Some(self.resolution(located))
    }

    /// Resolve to canonical identity, falling back to the input itself in
    /// the canonical language.
    pub fn resolve_canonical(&self, path: &str) -> Resolution {
        self.lookup(path).unwrap_or_else(|| {
            debug!("routes"; "unmapped path `{}` treated as canonical", path);
            Resolution {
                canonical: path.to_string(),
                template: Arc::from(path),
                language: Language::CANONICAL,
                kind: RouteKind::Unmapped,
            }
        })
    }

    /// Translate a path into `target`.
    ///
    /// Query and fragment are carried over. Unmapped paths come back unchanged.
    pub fn translate(&self, path: &str, target: Language) -> String {
        let route = RoutePath::parse(path);
        match self.index.locate(&self.tables, route.key()) {
            Some(located) => route.with_suffix(&self.spell(located, target)),
            None => path.to_string(),
        }
    }

    /// Language a path is spelled in; canonical when unmapped.
    pub fn detect_language(&self, path: &str) -> Language {
        let route = RoutePath::parse(path);
        self.index
            .locate(&self.tables, route.key())
            .map_or(Language::CANONICAL, |located| located.language)
    }

    /// The path in every language, for `hreflang` link sets.
    ///
    /// Empty for unmapped paths.
    pub fn alternates(&self, path: &str) -> Vec<(Language, String)> {
        let route = RoutePath::parse(path);
        let Some(located) = self.index.locate(&self.tables, route.key()) else {
            return Vec::new();
        };
        Language::ALL
            .into_iter()
            .map(|lang| (lang, route.with_suffix(&self.spell(located, lang))))
            .collect()
    }

    /// Spell a located route in `lang`.
    fn spell(&self, located: Located<'_>, lang: Language) -> String {
        match located.target {
            Target::Static(idx) => self.tables.statics.entries()[idx].path(lang).to_string(),
            Target::Dynamic(idx) => self.tables.dynamics.entries()[idx]
                .pattern(lang)
                .render(located.param.unwrap_or_default()),
        }
    }

    fn resolution(&self, located: Located<'_>) -> Resolution {
        let canonical = self.spell(located, Language::CANONICAL);
        match located.target {
            Target::Static(idx) => Resolution {
                canonical,
                template: Arc::clone(self.tables.statics.entries()[idx].canonical_arc()),
                language: located.language,
                kind: RouteKind::Static,
            },
            Target::Dynamic(idx) => Resolution {
                canonical,
                template: Arc::clone(self.tables.dynamics.entries()[idx].canonical_arc()),
                language: located.language,
                kind: RouteKind::Dynamic {
                    param: located.param.unwrap_or_default().to_string(),
                },
            },
        }
    }
}
