//! Logging utilities with colored output and progress display.
//!
//! Everything goes to stderr; stdout is reserved for command output
//! (`folio query`, `folio theme`).
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` for output shown only with `--verbose`
//! - `ProgressLine` for single-line progress display with multiple counters
//!
//! # Example
//!
//! ```ignore
//! log!("validate"; "checking {} files", count);
//!
//! let progress = ProgressLine::new("validate", &[("yaml", 6), ("markdown", 3)]);
//! progress.inc("yaml");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Active progress bar count (for log coordination)
static BAR_COUNT: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    let mut out = stderr().lock();

    let bar_count = BAR_COUNT.load(Ordering::SeqCst);
    if bar_count > 0 {
        execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
    }

    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "validate" | "query" => prefix.bright_blue().bold().to_string(),
        "theme" | "config" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Progress Line (single-line counters)
// ============================================================================

/// Single-line progress display with multiple counters
///
/// Displays: `[validate] yaml(42/69) markdown(5/10)`
///
/// All counters update in place on the same line. Uses `try_lock` to avoid
/// blocking worker threads - if display is busy, the update is skipped
pub struct ProgressLine {
    module: &'static str,
    counters: Vec<Counter>,
    lock: Mutex<()>,
}

struct Counter {
    name: &'static str,
    total: usize,
    current: AtomicUsize,
}

impl ProgressLine {
    /// Create a new progress display.
    ///
    /// Only includes counters with total > 0.
    pub fn new(module: &'static str, items: &[(&'static str, usize)]) -> Self {
        let counters: Vec<_> = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|&(name, total)| Counter {
                name,
                total,
                current: AtomicUsize::new(0),
            })
            .collect();

        BAR_COUNT.store(1, Ordering::SeqCst);

        let progress = Self {
            module,
            counters,
            lock: Mutex::new(()),
        };
        progress.display(false);
        progress
    }

    /// Increment the counter with the given name.
    ///
    /// Non-blocking: if display lock is held, skips refresh.
    #[inline]
    pub fn inc(&self, name: &str) {
        if let Some(counter) = self.counters.iter().find(|c| c.name == name) {
            counter.current.fetch_add(1, Ordering::Relaxed);
            if let Some(_guard) = self.lock.try_lock() {
                self.display(false);
            }
        }
    }

    fn line(&self) -> String {
        self.counters
            .iter()
            .map(|c| {
                format!(
                    "{}({}/{})",
                    c.name,
                    c.current.load(Ordering::Relaxed),
                    c.total
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Redraw the line in place; `keep` ends it with a newline.
    fn display(&self, keep: bool) {
        let prefix = colorize_prefix(self.module);
        let line = self.line();

        let mut out = stderr().lock();
        execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        if keep {
            writeln!(out, "{prefix} {line}").ok();
        } else {
            write!(out, "{prefix} {line}").ok();
        }
        out.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        BAR_COUNT.store(0, Ordering::SeqCst);
        {
            let _guard = self.lock.lock(); // wait for any pending display
            self.display(true);
        }
        std::mem::forget(self); // keep the line
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        BAR_COUNT.store(0, Ordering::SeqCst);

        let mut out = stderr().lock();
        execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        out.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_counters() {
        let progress = ProgressLine::new("validate", &[("yaml", 3), ("markdown", 0)]);
        assert_eq!(progress.counters.len(), 1);

        progress.inc("yaml");
        progress.inc("yaml");
        progress.inc("markdown");
        assert_eq!(progress.line(), "yaml(2/3)");

        progress.finish();
        assert_eq!(BAR_COUNT.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_prefix_contains_module() {
        assert!(colorize_prefix("validate").contains("[validate]"));
        assert!(colorize_prefix("Error").contains("[Error]"));
    }

    #[test]
    fn test_verbose_flag() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
