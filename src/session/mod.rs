//! Per-tab language session.
//!
//! One [`LanguageSession`] is created per client context and handed to the
//! rendering layer; there is no module-level active-language state.
//!
//! ```text
//!   start()          detect from URL -> (canonical? use stored preference) -> persist
//!   switch(lang)     persist, update, push translated path if it differs
//!   back/forward     URL wins: detect, update memory + preference
//! ```

mod history;
mod store;

pub use history::{History, MemoryHistory};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore, StoreError};

use crate::core::Language;
use crate::debug;
use crate::resolver::RouteResolver;

/// Default key the preference is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "preferred-language";

/// Active language of one tab, synchronized with its URL and stored preference.
pub struct LanguageSession<'r, S, H> {
    resolver: &'r RouteResolver,
    store: S,
    history: H,
    storage_key: String,
    active: Language,
}

impl<'r, S: PreferenceStore, H: History> LanguageSession<'r, S, H> {
    /// Initialize with the default storage key.
    pub fn start(resolver: &'r RouteResolver, store: S, history: H) -> Self {
        Self::start_with_key(resolver, store, history, DEFAULT_STORAGE_KEY)
    }

    /// Initialize: the URL decides, then the stored preference, then canonical.
    pub fn start_with_key(
        resolver: &'r RouteResolver,
        store: S,
        history: H,
        storage_key: impl Into<String>,
    ) -> Self {
        let mut session = Self {
            resolver,
            store,
            history,
            storage_key: storage_key.into(),
            active: Language::CANONICAL,
        };

        let from_url = resolver.detect_language(&session.history.current_path());
        session.active = if from_url.is_canonical() {
            // No explicit locale marker in the URL
            session.stored_preference().unwrap_or(from_url)
        } else {
            from_url
        };
        session.persist();

        debug!("session"; "started in {}", session.active);
        session
    }

    #[inline]
    pub fn active(&self) -> Language {
        self.active
    }

    /// Switch language on user request.
    ///
    /// Returns `false` when `lang` is already active. Otherwise the current
    /// path is translated and pushed when the spelling changes.
    pub fn switch_language(&mut self, lang: Language) -> bool {
        if lang == self.active {
            return false;
        }

        self.active = lang;
        self.persist();

        let current = self.history.current_path();
        let translated = self.resolver.translate(&current, lang);
        if translated != current {
            debug!("session"; "{} -> {}", current, translated);
            self.history.push_path(&translated);
        }
        true
    }

    /// Handle a back/forward navigation to `path`.
    ///
    /// The URL is the source of truth: returns `true` when the active
    /// language changed to match it.
    pub fn on_history_navigated(&mut self, path: &str) -> bool {
        let detected = self.resolver.detect_language(path);
        if detected == self.active {
            return false;
        }

        debug!("session"; "history moved to {} ({}), was {}", path, detected, self.active);
        self.active = detected;
        self.persist();
        true
    }

    /// Spell a path in the active language, for building links.
    pub fn localize(&self, path: &str) -> String {
        self.resolver.translate(path, self.active)
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable history access, e.g. to drive back/forward in tests or tools.
    #[inline]
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    fn stored_preference(&self) -> Option<Language> {
        let raw = match self.store.get(&self.storage_key) {
            Ok(raw) => raw?,
            Err(err) => {
                debug!("session"; "preference unavailable: {}", err);
                return None;
            }
        };
        match raw.parse() {
            Ok(lang) => Some(lang),
            Err(err) => {
                debug!("session"; "ignoring stored preference: {}", err);
                None
            }
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.set(&self.storage_key, self.active.code()) {
            debug!("session"; "failed to persist preference: {}", err);
        }
    }
}
