//! Folio - theme configuration and content collection validation for a
//! portfolio site.

mod cli;
mod config;
mod content;
mod logger;
mod schema;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use content::Registry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;
    let registry = Registry::standard();

    match &cli.command {
        Commands::Validate { args } => cli::validate::validate_site(args, &config, &registry),
        Commands::Query { args } => cli::query::run_query(args, &config, &registry),
        Commands::Theme { args } => cli::theme::print_theme(args, &config),
        Commands::Collections => {
            cli::collections::list_collections(&registry);
            Ok(())
        }
    }
}
