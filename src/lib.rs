//! localroute - bidirectional route localization.
//!
//! Every page has one canonical path (`/about`) and a spelling per language
//! (`/nosotros`, `/a-propos`). This crate maps between them in both
//! directions, detects the language of a URL, keeps a per-tab language
//! session in sync with navigation, and emits the rewrite rules a serving
//! layer needs so localized URLs reach canonical handlers.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── core/       # Language, RoutePath
//! ├── route/      # pattern matcher, route tables, validation, built-in routes
//! ├── resolver/   # reverse index + RouteResolver
//! ├── rewrite     # serving-layer rewrite rules
//! ├── session/    # LanguageSession, preference store, history
//! ├── config/     # localroute.toml
//! ├── cli/        # command handlers
//! ├── logger      # log!/debug! macros
//! └── utils/
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod resolver;
pub mod rewrite;
pub mod route;
pub mod session;
pub mod utils;

pub use crate::core::{Language, RoutePath, UnknownLanguage};
pub use config::{ConfigError, RouteConfig};
pub use resolver::{Resolution, RouteKind, RouteResolver};
pub use rewrite::{RewriteFormat, RewriteRule, generate_rewrites, render_rewrites};
pub use route::{RouteDecl, RouteTables, TableError};
pub use session::{
    History, JsonFileStore, LanguageSession, MemoryHistory, MemoryStore, PreferenceStore,
    StoreError,
};
