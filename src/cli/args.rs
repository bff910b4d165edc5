//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::Language;
use crate::rewrite::RewriteFormat;

/// Localized route resolver and rewrite generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: localroute.toml)
    #[arg(short = 'C', long, default_value = "localroute.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a path to its canonical route
    #[command(visible_alias = "r")]
    Resolve {
        /// Path or full URL
        path: String,
    },

    /// Spell a path in another language
    #[command(visible_alias = "t")]
    Translate {
        /// Path or full URL
        path: String,

        /// Target language
        #[arg(short, long, ignore_case = true)]
        to: Language,
    },

    /// Print the language a path is spelled in
    #[command(visible_alias = "d")]
    Detect {
        /// Path or full URL
        path: String,
    },

    /// Print the path in every language as JSON
    #[command(visible_alias = "a")]
    Alternates {
        /// Path or full URL
        path: String,
    },

    /// Generate serving-layer rewrite rules
    #[command(visible_alias = "w")]
    Rewrites {
        #[command(flatten)]
        args: RewritesArgs,
    },

    /// Check route tables for conflicts and gaps
    #[command(visible_alias = "v")]
    Validate,
}

/// Rewrites command arguments. Unset values fall back to `[rewrites]`.
#[derive(clap::Args, Debug, Clone)]
pub struct RewritesArgs {
    /// Output format
    #[arg(short, long)]
    pub format: Option<RewriteFormat>,

    /// Write to this file instead of stdout (`-` for stdout)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
