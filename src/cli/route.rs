//! Single-path commands: resolve, translate, detect, alternates.

use anyhow::Result;
use serde_json::{Map, Value};
use std::io::Write;

use crate::config::RouteConfig;
use crate::core::Language;
use crate::resolver::RouteKind;

/// Print the canonical identity of `path`.
pub fn resolve(config: &RouteConfig, path: &str, out: &mut dyn Write) -> Result<()> {
    let resolver = config.resolver()?;
    let resolution = resolver.resolve_canonical(path);

    let kind = match &resolution.kind {
        RouteKind::Static => "static".to_string(),
        RouteKind::Dynamic { param } => format!("dynamic ({param})"),
        RouteKind::Unmapped => "unmapped".to_string(),
    };

    writeln!(out, "canonical: {}", resolution.canonical)?;
    writeln!(out, "template:  {}", resolution.template)?;
    writeln!(out, "language:  {}", resolution.language)?;
    writeln!(out, "kind:      {kind}")?;
    Ok(())
}

/// Print `path` spelled in `to`.
pub fn translate(config: &RouteConfig, path: &str, to: Language, out: &mut dyn Write) -> Result<()> {
    let resolver = config.resolver()?;
    writeln!(out, "{}", resolver.translate(path, to))?;
    Ok(())
}

/// Print the language code `path` is spelled in.
pub fn detect(config: &RouteConfig, path: &str, out: &mut dyn Write) -> Result<()> {
    let resolver = config.resolver()?;
    writeln!(out, "{}", resolver.detect_language(path))?;
    Ok(())
}

/// Print `{"en": .., "es": .., "fr": ..}`; `{}` for unmapped paths.
pub fn alternates(config: &RouteConfig, path: &str, out: &mut dyn Write) -> Result<()> {
    let resolver = config.resolver()?;
    let map: Map<String, Value> = resolver
        .alternates(path)
        .into_iter()
        .map(|(lang, spelled)| (lang.code().to_string(), Value::String(spelled)))
        .collect();

    serde_json::to_writer_pretty(&mut *out, &Value::Object(map))?;
    writeln!(out)?;
    Ok(())
}
