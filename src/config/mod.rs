//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── theme/     # [theme.global], [theme.ui], [theme.footer]
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                       |
//! |--------------------|-----------------------------------------------|
//! | `[build]`          | Content directory                             |
//! | `[validate]`       | Failure level, unmatched file reporting       |
//! | `[theme.global]`   | Profile picture, meeting link, contact        |
//! | `[theme.ui]`       | Color roles and component style overrides     |
//! | `[theme.footer]`   | Credits, color mode switch, social links      |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildSectionConfig, ThemeSectionConfig, ValidateConfig, ValidateLevel};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, ValidateArgs},
    debug, log,
    utils::date::current_year,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory: parent of the config file, or cwd
    #[serde(skip)]
    pub root: PathBuf,

    /// Theme overrides
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Content paths
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Content validation settings
    #[serde(default)]
    pub validate: ValidateConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. Without one, built-in
    /// defaults apply and cwd becomes the project root. Footer credits are
    /// rendered here, once, for the current year.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.finalize(cli);
        config.validate(cli.command.reads_content())?;

        Ok(config)
    }

    /// Resolve paths, apply command options and render year-dependent values.
    fn finalize(&mut self, cli: &Cli) {
        if let Some(content) = &cli.content {
            self.build.content = content.clone();
        }
        self.normalize_paths();
        self.apply_command_options(cli);
        self.theme.evaluate(current_year());
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Validate { args } => self.apply_validate_args(args),
            Commands::Query { .. } | Commands::Theme { .. } | Commands::Collections => {}
        }
    }

    /// Apply validate arguments from CLI.
    fn apply_validate_args(&mut self, args: &ValidateArgs) {
        crate::logger::set_verbose(args.verbose);

        if args.warn_only {
            self.validate.level = ValidateLevel::Warn;
        }
    }

    /// Normalize paths relative to the root directory.
    fn normalize_paths(&mut self) {
        let root = crate::utils::path::normalize_path(&self.root);
        self.build.content = crate::utils::path::normalize_path(&root.join(&self.build.content));
        if !self.config_path.as_os_str().is_empty() {
            self.config_path = crate::utils::path::normalize_path(&self.config_path);
        }
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// The content directory is only checked when the command reads it.
    /// Prints warnings and returns all collected errors at once.
    pub fn validate(&self, reads_content: bool) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if reads_content {
            self.build.validate(&mut diag);
        }
        self.theme.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
