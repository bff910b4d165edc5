//! `[session]` and `[rewrites]` sections.
//!
//! ```toml
//! [session]
//! storage_key = "preferred-language"
//!
//! [rewrites]
//! format = "redirects"        # json | redirects
//! output = "public/_redirects"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::rewrite::RewriteFormat;
use crate::session::DEFAULT_STORAGE_KEY;

/// Language session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key the preferred language is persisted under.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Rewrite generation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewritesConfig {
    pub format: RewriteFormat,

    /// Output file, relative to the config file. Stdout when unset.
    pub output: Option<PathBuf>,
}
