//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Folio: theme configuration and content collection validation
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate content files against their collection schemas
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Print validated content documents as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Print the resolved theme configuration as JSON
    #[command(visible_alias = "t")]
    Theme {
        #[command(flatten)]
        args: ThemeArgs,
    },

    /// List content collections and their source patterns
    #[command(visible_alias = "c")]
    Collections,
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Files or directories to validate. If omitted, validates all content.
    /// Use `-` to read paths from stdin.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Treat validation failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Paths to query (files, directories, or omit for all content).
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Only include documents of this collection
    #[arg(long, value_name = "NAME")]
    pub collection: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Theme command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ThemeArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Render the footer credits for this year instead of the current one
    #[arg(long)]
    pub year: Option<u16>,

    /// Print the resolved classes of one component slot instead of the theme
    #[arg(long, num_args = 2, value_names = ["COMPONENT", "SLOT"])]
    pub class: Option<Vec<String>>,

    /// Selected component option for `--class` (repeatable)
    #[arg(long = "option", short = 'o', value_name = "NAME=VALUE", requires = "class", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Extra classes appended for `--class`
    #[arg(long, requires = "class")]
    pub extra: Option<String>,
}

/// Parse a `name=value` option pair.
fn parse_option(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{s}`")),
    }
}

impl Commands {
    /// Whether the command walks the content directory.
    pub const fn reads_content(&self) -> bool {
        matches!(self, Self::Validate { .. } | Self::Query { .. })
    }
}
