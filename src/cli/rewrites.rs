//! Rewrite rule generation command.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::RewritesArgs;
use crate::config::RouteConfig;
use crate::log;
use crate::rewrite::{generate_rewrites, render_rewrites};
use crate::utils::counted;

/// Generate rules and write them to the configured destination.
///
/// `--output` beats `[rewrites].output`; `-` forces stdout.
pub fn write_rewrites(config: &RouteConfig, args: &RewritesArgs, out: &mut dyn Write) -> Result<()> {
    let resolver = config.resolver()?;
    let rules = generate_rewrites(resolver.tables());
    let format = args.format.unwrap_or(config.rewrites.format);
    let rendered = render_rewrites(&rules, format).context("Failed to render rewrite rules")?;

    match destination(config, args) {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create `{}`", parent.display()))?;
            }
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write `{}`", path.display()))?;
            log!("rewrites"; "wrote {} to {}", counted(rules.len(), "rule"), path.display());
        }
        None => out.write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn destination(config: &RouteConfig, args: &RewritesArgs) -> Option<PathBuf> {
    match &args.output {
        Some(path) if path == Path::new("-") => None,
        Some(path) => Some(path.clone()),
        None => config.rewrites_output(),
    }
}
