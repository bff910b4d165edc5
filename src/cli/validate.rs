//! Route table validation command.

use anyhow::Result;

use crate::config::{ConfigError, RouteConfig};
use crate::log;
use crate::utils::counted;

/// Validate the configured tables. Errors fail the command; warnings don't.
pub fn validate_routes(config: &RouteConfig) -> Result<()> {
    let tables = config.tables()?;
    let diagnostics = tables.validate();
    diagnostics.print_warnings();

    if diagnostics.has_errors() {
        return Err(ConfigError::Diagnostics(diagnostics).into());
    }

    log!(
        "validate";
        "{} ok ({} static, {} dynamic)",
        counted(tables.len(), "route"),
        tables.statics.len(),
        tables.dynamics.len()
    );
    Ok(())
}
