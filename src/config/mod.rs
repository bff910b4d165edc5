//! Route configuration management for `localroute.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[session]`    | Preference storage key                         |
//! | `[rewrites]`   | Rewrite output format and destination          |
//! | `[[routes]]`   | Route declarations (built-in tables if absent) |

mod error;
mod section;

pub use error::ConfigError;
pub use section::{RewritesConfig, SessionConfig};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::resolver::RouteResolver;
use crate::route::{RouteDecl, RouteTables};
use crate::session::{History, LanguageSession, PreferenceStore};
use crate::{debug, log};

/// Default config file name.
pub const CONFIG_FILE: &str = "localroute.toml";

/// Root configuration structure representing localroute.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Absolute path to the loaded file; `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub rewrites: RewritesConfig,

    /// Declared routes. Empty means the built-in tables.
    #[serde(default)]
    pub routes: Vec<RouteDecl>,
}

impl RouteConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// A missing file is not an error: the defaults and built-in tables apply.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        match find_config_file(&cwd, config_name) {
            Some(path) => {
                let config = Self::from_path(&path)
                    .with_context(|| format!("Failed to load `{}`", path.display()))?;
                debug!("config"; "loaded {}", path.display());
                Ok(config)
            }
            None => {
                debug!("config"; "no {} found, using built-in routes", config_name.display());
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Directory relative paths in the config are resolved against.
    pub fn root(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."))
    }

    /// Compile the declared routes, or the built-in ones when none are declared.
    pub fn tables(&self) -> Result<RouteTables, ConfigError> {
        let tables = if self.routes.is_empty() {
            RouteTables::builtin()?
        } else {
            RouteTables::from_routes(self.routes.iter().cloned())?
        };
        Ok(tables)
    }

    /// Compile and validate the tables, then build a resolver.
    ///
    /// Validation errors abort; warnings are printed.
    pub fn resolver(&self) -> Result<RouteResolver, ConfigError> {
        let tables = self.tables()?;
        let diagnostics = tables
            .validate()
            .into_result()
            .map_err(ConfigError::Diagnostics)?;
        diagnostics.print_warnings();
        Ok(RouteResolver::new(tables))
    }

    /// Where generated rewrites are written, if anywhere.
    pub fn rewrites_output(&self) -> Option<PathBuf> {
        self.rewrites
            .output
            .as_ref()
            .map(|output| self.root().join(output))
    }

    /// Start a language session persisting under `[session].storage_key`.
    pub fn start_session<'r, S: PreferenceStore, H: History>(
        &self,
        resolver: &'r RouteResolver,
        store: S,
        history: H,
    ) -> LanguageSession<'r, S, H> {
        LanguageSession::start_with_key(resolver, store, history, &self.session.storage_key)
    }
}

/// Find config file by searching upward from `start`.
///
/// ```text
/// /home/user/site/src/pages/       ← start
/// /home/user/site/localroute.toml  ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}
