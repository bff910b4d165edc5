//! Reverse index: localized path -> (route, language).

use rustc_hash::FxHashMap;

use crate::core::Language;
use crate::route::RouteTables;

/// Position of a route in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Static(usize),
    Dynamic(usize),
}

/// A path located in the reverse index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located<'p> {
    pub target: Target,
    pub language: Language,
    /// Captured parameter value (dynamic routes only).
    pub param: Option<&'p str>,
}

/// Lookup structure derived from the route tables.
///
/// Languages are inserted canonical first and the first insertion for a
/// literal wins, so a path spelled the same in two languages detects as
/// the earlier one. Undeclared spellings are not indexed: they fall back to
/// the canonical spelling, which is always indexed.
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    statics: FxHashMap<String, (usize, Language)>,
    /// (entry, language) in table order, then language order.
    dynamics: Vec<(usize, Language)>,
}

impl ReverseIndex {
    /// Build the index once from immutable tables.
    pub fn build(tables: &RouteTables) -> Self {
        let mut statics = FxHashMap::default();
        for (idx, entry) in tables.statics.entries().iter().enumerate() {
            for lang in Language::ALL {
                if let Some(path) = entry.declared(lang) {
                    statics.entry(path.to_string()).or_insert((idx, lang));
                }
            }
        }

        let mut dynamics = Vec::new();
        for (idx, entry) in tables.dynamics.entries().iter().enumerate() {
            let mut indexed: Vec<&str> = Vec::with_capacity(Language::ALL.len());
            for lang in Language::ALL {
                let Some(pattern) = entry.declared(lang) else {
                    continue;
                };
                // Same spelling as an earlier language never wins a match
                if indexed.contains(&pattern.template()) {
                    continue;
                }
                indexed.push(pattern.template());
                dynamics.push((idx, lang));
            }
        }

        Self { statics, dynamics }
    }

    /// Exact static lookup, then dynamic matchers in order.
    pub fn locate<'p>(&self, tables: &RouteTables, key: &'p str) -> Option<Located<'p>> {
        if let Some(&(idx, language)) = self.statics.get(key) {
            return Some(Located {
                target: Target::Static(idx),
                language,
                param: None,
            });
        }

        let entries = tables.dynamics.entries();
        self.dynamics.iter().find_map(|&(idx, language)| {
            let value = entries.get(idx)?.pattern(language).captures(key)?;
            Some(Located {
                target: Target::Dynamic(idx),
                language,
                param: Some(value),
            })
        })
    }

    /// Number of indexed static spellings.
    pub fn static_len(&self) -> usize {
        self.statics.len()
    }

    /// Number of compiled dynamic matchers.
    pub fn dynamic_len(&self) -> usize {
        self.dynamics.len()
    }
}
