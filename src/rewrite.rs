//! Rewrite rules for the serving layer.
//!
//! Handlers only exist under canonical paths. For every localized spelling
//! that differs from its canonical path, the serving layer needs one rule
//! `external -> canonical`. Rules are generated at build/deploy time.
//!
//! ```text
//! /nosotros         -> /about
//! /noticias/:slug   -> /blog/:slug
//! ```

use std::fmt::Write as _;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Language;
use crate::route::RouteTables;

/// One `source -> destination` rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    /// Externally visible path.
    pub source: String,
    /// Canonical path the handler lives under.
    pub destination: String,
}

impl RewriteRule {
    fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Output format for generated rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RewriteFormat {
    /// `{"rewrites": [{"source": .., "destination": ..}]}`
    #[default]
    Json,
    /// `_redirects` lines: `/nosotros /about 200`
    Redirects,
}

/// Generate rules for every non-identity localized spelling.
///
/// Order: static table, then dynamic table, each in declaration order,
/// languages in [`Language::ALL`] order within a route. Dynamic parameters
/// are written as a named one-segment capture (`:slug`) on both sides. A
/// source spelled the same in two languages is emitted once.
pub fn generate_rewrites(tables: &RouteTables) -> Vec<RewriteRule> {
    let mut rules = Vec::new();
    let mut seen = FxHashSet::default();

    for entry in tables.statics.entries() {
        for lang in Language::localized() {
            let source = entry.path(lang);
            if source != entry.canonical() && seen.insert(source.to_string()) {
                rules.push(RewriteRule::new(source, entry.canonical()));
            }
        }
    }

    for entry in tables.dynamics.entries() {
        let destination = entry.pattern(Language::CANONICAL).generic();
        for lang in Language::localized() {
            let source = entry.pattern(lang).generic();
            if source != destination && seen.insert(source.clone()) {
                rules.push(RewriteRule::new(source, destination.clone()));
            }
        }
    }

    rules
}

/// Render rules in the requested format.
pub fn render_rewrites(rules: &[RewriteRule], format: RewriteFormat) -> serde_json::Result<String> {
    match format {
        RewriteFormat::Json => {
            #[derive(Serialize)]
            struct Document<'a> {
                rewrites: &'a [RewriteRule],
            }
            let mut out = serde_json::to_string_pretty(&Document { rewrites: rules })?;
            out.push('\n');
            Ok(out)
        }
        RewriteFormat::Redirects => {
            let mut out = String::new();
            for rule in rules {
                // Infallible for String
                let _ = writeln!(out, "{} {} 200", rule.source, rule.destination);
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteDecl;

    fn rules_for(routes: Vec<RouteDecl>) -> Vec<RewriteRule> {
        generate_rewrites(&RouteTables::from_routes(routes).unwrap())
    }

    #[test]
    fn test_static_and_dynamic_rules() {
        let rules = rules_for(vec![
            RouteDecl::new("/about")
                .with(Language::Es, "/nosotros")
                .with(Language::Fr, "/a-propos"),
            RouteDecl::new("/blog/:slug").with(Language::Es, "/noticias/:slug"),
        ]);
        assert_eq!(
            rules,
            vec![
                RewriteRule::new("/nosotros", "/about"),
                RewriteRule::new("/a-propos", "/about"),
                RewriteRule::new("/noticias/:slug", "/blog/:slug"),
            ]
        );
    }

    #[test]
    fn test_identities_omitted() {
        let rules = rules_for(vec![
            RouteDecl::new("/").with(Language::Es, "/").with(Language::Fr, "/"),
            RouteDecl::new("/blog").with(Language::Es, "/noticias"),
        ]);
        assert_eq!(rules, vec![RewriteRule::new("/noticias", "/blog")]);
    }

    #[test]
    fn test_builtin_never_emits_identity() {
        let rules = generate_rewrites(&RouteTables::builtin().unwrap());
        assert!(!rules.is_empty());
        for rule in &rules {
            assert_ne!(rule.source, rule.destination);
        }
        // 8 non-root statics + 3 dynamics, two languages each
        assert_eq!(rules.len(), (8 + 3) * 2);
    }

    #[test]
    fn test_shared_spelling_emitted_once() {
        let rules = rules_for(vec![
            RouteDecl::new("/gallery")
                .with(Language::Es, "/galeria")
                .with(Language::Fr, "/galeria"),
        ]);
        assert_eq!(rules, vec![RewriteRule::new("/galeria", "/gallery")]);
    }

    #[test]
    fn test_deterministic_order() {
        let tables = RouteTables::builtin().unwrap();
        assert_eq!(generate_rewrites(&tables), generate_rewrites(&tables));
        let rules = generate_rewrites(&tables);
        assert_eq!(rules[0], RewriteRule::new("/nosotros", "/about"));
        assert_eq!(rules[1], RewriteRule::new("/a-propos", "/about"));
    }

    #[test]
    fn test_render_json() {
        let rules = vec![RewriteRule::new("/nosotros", "/about")];
        let out = render_rewrites(&rules, RewriteFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["rewrites"][0]["source"], "/nosotros");
        assert_eq!(value["rewrites"][0]["destination"], "/about");
    }

    #[test]
    fn test_render_redirects() {
        let rules = vec![
            RewriteRule::new("/nosotros", "/about"),
            RewriteRule::new("/noticias/:slug", "/blog/:slug"),
        ];
        let out = render_rewrites(&rules, RewriteFormat::Redirects).unwrap();
        assert_eq!(out, "/nosotros /about 200\n/noticias/:slug /blog/:slug 200\n");
    }
}
