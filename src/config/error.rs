//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::route::{RouteDiagnostics, TableError};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Route table error")]
    Table(#[from] TableError),

    // No #[from]: source() would print the diagnostics twice
    #[error("{0}")]
    Diagnostics(RouteDiagnostics),
}
