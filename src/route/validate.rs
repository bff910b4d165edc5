//! Route table validation.
//!
//! Detection runs in two phases, like permalink conflict detection:
//! collect every `(literal path -> claims)` pair, then report literals
//! claimed by more than one canonical route.
//!
//! | Check            | Severity | Meaning                                        |
//! |------------------|----------|------------------------------------------------|
//! | duplicate route  | error    | same canonical template declared twice         |
//! | self-identity    | error    | canonical-language spelling differs            |
//! | path conflict    | error    | one literal path claimed by two routes         |
//! | shadowed path    | warning  | static path also matched by a dynamic route    |
//! | missing language | warning  | no spelling declared, canonical used instead   |

use std::fmt;

use owo_colors::OwoColorize;
use rustc_hash::{FxHashMap, FxHashSet};

use super::table::RouteTables;
use crate::core::Language;
use crate::log;
use crate::utils::counted;

/// One claim on a literal path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathClaim {
    pub language: Language,
    pub canonical: String,
}

/// Literal path -> claims, in discovery order.
pub type PathClaimMap = FxHashMap<String, Vec<PathClaim>>;

/// A single route diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDiagnostic {
    /// Canonical template or literal path the diagnostic is about.
    pub route: String,
    pub message: String,
    pub hint: Option<String>,
}

impl RouteDiagnostic {
    pub fn new(route: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for RouteDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}{}", "[".dimmed(), self.route.cyan(), "]".dimmed())?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

/// Validation report for a set of route tables.
#[derive(Debug, Default)]
pub struct RouteDiagnostics {
    errors: Vec<RouteDiagnostic>,
    warnings: Vec<RouteDiagnostic>,
}

impl RouteDiagnostics {
    pub fn error(&mut self, diagnostic: RouteDiagnostic) {
        self.errors.push(diagnostic);
    }

    pub fn warn(&mut self, diagnostic: RouteDiagnostic) {
        self.warnings.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[RouteDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[RouteDiagnostic] {
        &self.warnings
    }

    /// Print warnings in grouped form.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        log!("warning"; "{}", counted(self.warnings.len(), "route warning"));
        for warning in &self.warnings {
            eprintln!("- [{}] {}", warning.route, warning.message);
        }
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<Self, Self> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for RouteDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "route validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for RouteDiagnostics {}

// ============================================================================
// Checks
// ============================================================================

impl RouteTables {
    /// Check every table invariant.
    pub fn validate(&self) -> RouteDiagnostics {
        let mut diag = RouteDiagnostics::default();

        check_duplicates(self, &mut diag);
        check_self_identity(self, &mut diag);

        let claims = collect_path_claims(self);
        for diagnostic in detect_conflicts(&claims) {
            diag.error(diagnostic);
        }

        check_shadowed(self, &mut diag);
        check_coverage(self, &mut diag);
        diag
    }
}

fn check_duplicates(tables: &RouteTables, diag: &mut RouteDiagnostics) {
    let mut seen = FxHashSet::default();
    for decl in tables.decls() {
        if !seen.insert(decl.path.as_str()) {
            diag.error(
                RouteDiagnostic::new(&decl.path, "route declared more than once")
                    .with_hint("merge the translations into a single declaration"),
            );
        }
    }
}

fn check_self_identity(tables: &RouteTables, diag: &mut RouteDiagnostics) {
    let lang = Language::CANONICAL;
    for entry in tables.statics.entries() {
        if let Some(path) = entry.declared(lang)
            && path != entry.canonical()
        {
            diag.error(self_identity_error(entry.canonical(), path));
        }
    }
    for entry in tables.dynamics.entries() {
        if let Some(pattern) = entry.declared(lang)
            && pattern.template() != entry.canonical()
        {
            diag.error(self_identity_error(entry.canonical(), pattern.template()));
        }
    }
}

fn self_identity_error(canonical: &str, declared: &str) -> RouteDiagnostic {
    RouteDiagnostic::new(
        canonical,
        format!(
            "`{}` spelling `{declared}` differs from the canonical path",
            Language::CANONICAL
        ),
    )
    .with_hint(format!("remove `{}` or set it to `{canonical}`", Language::CANONICAL))
}

/// Collect every literal path each route claims, in every language.
///
/// Dynamic templates are keyed without their parameter name, so
/// `/x/:a` and `/x/:b` claim the same literal.
pub fn collect_path_claims(tables: &RouteTables) -> PathClaimMap {
    let mut claims = PathClaimMap::default();
    let mut push = |key: String, language: Language, canonical: &str| {
        let list = claims.entry(key).or_default();
        // A no-op translation repeats the same claim; keep one per language
        if !list
            .iter()
            .any(|c| c.canonical == canonical && c.language == language)
        {
            list.push(PathClaim {
                language,
                canonical: canonical.to_string(),
            });
        }
    };

    for entry in tables.statics.entries() {
        for lang in Language::ALL {
            push(entry.path(lang).to_string(), lang, entry.canonical());
        }
    }
    for entry in tables.dynamics.entries() {
        for lang in Language::ALL {
            push(entry.pattern(lang).render(":*"), lang, entry.canonical());
        }
    }
    claims
}

/// Literal paths claimed by more than one canonical route.
pub fn detect_conflicts(claims: &PathClaimMap) -> Vec<RouteDiagnostic> {
    let mut conflicts: Vec<_> = claims
        .iter()
        .filter(|(_, list)| {
            let canonicals: FxHashSet<_> = list.iter().map(|c| c.canonical.as_str()).collect();
            canonicals.len() > 1
        })
        .map(|(path, list)| {
            let detail = list
                .iter()
                .map(|c| format!("{} ({})", c.canonical, c.language))
                .collect::<Vec<_>>()
                .join(", ");
            RouteDiagnostic::new(
                path.replace(":*", ":<param>"),
                format!("claimed by {} routes: {detail}", list.len()),
            )
            .with_hint("every localized path must map back to exactly one route")
        })
        .collect();
    conflicts.sort_by(|a, b| a.route.cmp(&b.route));
    conflicts
}

fn check_shadowed(tables: &RouteTables, diag: &mut RouteDiagnostics) {
    for entry in tables.statics.entries() {
        for lang in Language::ALL {
            let path = entry.path(lang);
            let shadow = tables
                .dynamics
                .entries()
                .iter()
                .find(|d| d.pattern(lang).captures(path).is_some());
            if let Some(dynamic) = shadow {
                diag.warn(RouteDiagnostic::new(
                    path,
                    format!(
                        "also matches dynamic route {} ({lang}); the static route wins",
                        dynamic.canonical()
                    ),
                ));
            }
        }
    }
}

fn check_coverage(tables: &RouteTables, diag: &mut RouteDiagnostics) {
    for decl in tables.decls() {
        let missing: Vec<_> = Language::localized()
            .filter(|lang| !decl.translations.contains_key(lang))
            .map(Language::code)
            .collect();
        if !missing.is_empty() {
            diag.warn(RouteDiagnostic::new(
                &decl.path,
                format!("no spelling for {}, canonical path used", missing.join(", ")),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteDecl;

    fn tables(routes: Vec<RouteDecl>) -> RouteTables {
        RouteTables::from_routes(routes).unwrap()
    }

    fn full(path: &str, es: &str, fr: &str) -> RouteDecl {
        RouteDecl::new(path)
            .with(Language::Es, es)
            .with(Language::Fr, fr)
    }

    #[test]
    fn test_clean_tables() {
        let diag = tables(vec![
            full("/about", "/nosotros", "/a-propos"),
            full("/blog/:slug", "/noticias/:slug", "/actualites/:slug"),
        ])
        .validate();
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_duplicate_route() {
        let diag = tables(vec![
            full("/about", "/nosotros", "/a-propos"),
            full("/about", "/acerca", "/qui"),
        ])
        .validate();
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.message.contains("more than once"))
        );
    }

    #[test]
    fn test_self_identity_violation() {
        let diag = tables(vec![
            full("/about", "/nosotros", "/a-propos").with(Language::En, "/about-us"),
        ])
        .validate();
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].route, "/about");
    }

    #[test]
    fn test_explicit_matching_canonical_is_fine() {
        let diag =
            tables(vec![full("/about", "/nosotros", "/a-propos").with(Language::En, "/about")])
                .validate();
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_same_language_conflict() {
        let diag = tables(vec![
            full("/about", "/nosotros", "/a-propos"),
            full("/team", "/nosotros", "/equipe"),
        ])
        .validate();
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].route, "/nosotros");
        assert!(diag.errors()[0].message.contains("/about (es)"));
        assert!(diag.errors()[0].message.contains("/team (es)"));
    }

    #[test]
    fn test_cross_language_conflict() {
        // "/services" is canonical for one route and the es spelling of another
        let diag = tables(vec![
            full("/services", "/servicios", "/prestations"),
            full("/offers", "/services", "/offres"),
        ])
        .validate();
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].route, "/services");
    }

    #[test]
    fn test_no_op_translation_is_not_conflict() {
        let diag = tables(vec![full("/blog", "/blog", "/blog")]).validate();
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_dynamic_conflict_ignores_param_name() {
        let diag = tables(vec![
            full("/blog/:slug", "/noticias/:slug", "/actualites/:slug"),
            full("/news/:id", "/noticias/:id", "/nouvelles/:id"),
        ])
        .validate();
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].route, "/noticias/:<param>");
    }

    #[test]
    fn test_shadowed_static_warning() {
        let diag = tables(vec![
            full("/blog/archive", "/noticias/archivo", "/actualites/archives"),
            full("/blog/:slug", "/noticias/:slug", "/actualites/:slug"),
        ])
        .validate();
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 3);
        assert!(diag.warnings()[0].message.contains("/blog/:slug"));
    }

    #[test]
    fn test_missing_language_warning() {
        let diag = tables(vec![RouteDecl::new("/contact").with(Language::Es, "/contacto")]).validate();
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].message.contains("fr"));
    }

    #[test]
    fn test_display_lists_errors() {
        let diag = tables(vec![
            full("/about", "/x", "/y"),
            full("/team", "/x", "/y"),
        ])
        .validate();
        assert_eq!(diag.errors().len(), 2);
        let display = format!("{diag}");
        assert!(display.contains("route validation failed"));
        assert!(display.contains("/x"));
        assert!(display.contains("/y"));
        assert!(diag.into_result().is_err());
    }
}
