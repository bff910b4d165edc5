//! Command-line interface module.

mod args;
pub mod rewrites;
pub mod route;
pub mod validate;

pub use args::{Cli, Commands, RewritesArgs};

use anyhow::Result;
use std::io::Write;

use crate::config::RouteConfig;

/// Dispatch a parsed command. Command output goes to `out`, logs to stderr.
pub fn run(cli: &Cli, config: &RouteConfig, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Commands::Resolve { path } => route::resolve(config, path, out),
        Commands::Translate { path, to } => route::translate(config, path, *to, out),
        Commands::Detect { path } => route::detect(config, path, out),
        Commands::Alternates { path } => route::alternates(config, path, out),
        Commands::Rewrites { args } => rewrites::write_rewrites(config, args, out),
        Commands::Validate => validate::validate_routes(config),
    }
}
