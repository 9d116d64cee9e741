//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Whether `value` parses as an absolute URL with a host.
///
/// # Examples
/// ```ignore
/// is_absolute_url("https://cal.com/")       -> true
/// is_absolute_url("mailto:ada@example.com") -> false  (no host)
/// is_absolute_url("/contact")               -> false
/// ```
pub fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value).is_ok_and(|url| url.host_str().is_some())
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/blog/   ← cwd
/// /home/user/site/folio.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================
