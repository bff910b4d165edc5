//! localroute - route localization CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use localroute::RouteConfig;
use localroute::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    localroute::logger::set_verbose(cli.verbose);

    let config = RouteConfig::load(&cli.config)?;
    cli::run(&cli, &config, &mut std::io::stdout().lock())
}
