//! Validation report types and formatting.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use owo_colors::OwoColorize;

use crate::content::SchemaValidationError;
use crate::utils::plural_s;

/// A single schema violation inside a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl From<&SchemaValidationError> for Violation {
    fn from(err: &SchemaValidationError) -> Self {
        Self {
            path: err.path.clone(),
            message: format!("expected {}, found {}", err.expected, err.actual),
        }
    }
}

/// Outcome of validating a set of content files.
///
/// Keyed by content-relative file name so the printed order is stable no
/// matter which worker finished first.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Files that passed, per collection.
    pub passed: BTreeMap<&'static str, usize>,
    /// Schema violations, grouped by file, each tagged with its collection.
    pub invalid: BTreeMap<String, (String, Vec<Violation>)>,
    /// Files that could not be read or parsed.
    pub unreadable: BTreeMap<String, String>,
    /// Files that no collection claims.
    pub unmatched: BTreeSet<String>,
}

impl ValidationReport {
    pub fn add_passed(&mut self, collection: &'static str) {
        *self.passed.entry(collection).or_default() += 1;
    }

    pub fn add_invalid(&mut self, file: String, collection: String, errors: &[SchemaValidationError]) {
        let violations = errors.iter().map(Violation::from).collect();
        self.invalid.insert(file, (collection, violations));
    }

    pub fn add_unreadable(&mut self, file: String, reason: String) {
        self.unreadable.insert(file, reason);
    }

    pub fn add_unmatched(&mut self, file: String) {
        self.unmatched.insert(file);
    }

    /// Files that failed validation or parsing.
    pub fn failed_file_count(&self) -> usize {
        self.invalid.len() + self.unreadable.len()
    }

    pub fn passed_file_count(&self) -> usize {
        self.passed.values().sum()
    }

    /// Total schema violation count.
    pub fn violation_count(&self) -> usize {
        self.invalid.values().map(|(_, v)| v.len()).sum()
    }

    /// Print the full report to stderr (schema -> parse -> unmatched).
    pub fn print(&self, show_unmatched: bool) {
        if !self.invalid.is_empty() {
            let error_count = self.violation_count();
            print_header(
                "schema",
                format!(
                    "({} file{}, {} error{})",
                    self.invalid.len(),
                    plural_s(self.invalid.len()),
                    error_count,
                    plural_s(error_count)
                ),
            );
            for (file, (collection, violations)) in &self.invalid {
                eprintln!(
                    "{}{}{} {}",
                    "[".dimmed(),
                    file.cyan(),
                    "]".dimmed(),
                    collection.dimmed()
                );
                for v in violations {
                    eprintln!("{} `{}` {}", "→".red(), v.path, v.message);
                }
            }
        }

        if !self.unreadable.is_empty() {
            let count = self.unreadable.len();
            print_header("parse", format!("({count} file{})", plural_s(count)));
            for (file, reason) in &self.unreadable {
                eprintln!("{}{}{}", "[".dimmed(), file.cyan(), "]".dimmed());
                eprintln!("{} {}", "→".red(), reason);
            }
        }

        if show_unmatched && !self.unmatched.is_empty() {
            let count = self.unmatched.len();
            eprintln!();
            eprintln!(
                "{} {}",
                "unmatched".yellow().bold(),
                format!("({count} file{} in no collection)", plural_s(count)).dimmed()
            );
            for file in &self.unmatched {
                eprintln!("- {file}");
            }
        }
    }
}

fn print_header(name: &str, detail: String) {
    eprintln!();
    eprintln!("{} {}", name.red().bold(), detail.dimmed());
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failed_file_count();
        let passed = self.passed_file_count();

        if failed == 0 {
            write!(
                f,
                "{} {}",
                "all documents valid".green(),
                format!("({passed} file{})", plural_s(passed)).dimmed()
            )
        } else {
            write!(
                f,
                "{} {} {} {}",
                "found".dimmed(),
                failed.to_string().red().bold(),
                format!("invalid file{}", plural_s(failed)).dimmed(),
                format!("({passed} passed)").dimmed()
            )
        }
    }
}
