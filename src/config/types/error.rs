//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // no #[from]: source() would print the diagnostics twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "build.content")
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and warnings collected while validating `folio.toml`.
///
/// Warnings never fail the load; they are printed in one group by
/// [`ConfigDiagnostics::print_warnings`].
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Print collected warnings, one line per field.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "suspicious config values (kept as-is):");
        for (field, message) in &self.warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("folio.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("folio.toml"));
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("theme.global.email"), "no `@`");
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.is_empty());
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_errors_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(FieldPath::new("build.content"), "not found", "create it");
        diag.error_with_hint(FieldPath::new("build.content"), "again", "fix it");
        assert_eq!(diag.len(), 2);

        let err = diag.into_result().unwrap_err();
        assert_eq!(err.errors()[1].hint.as_deref(), Some("fix it"));
        assert!(err.to_string().contains("build.content"));
    }
}
