//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"         # Content collections directory (relative to site root)
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory.
    pub content: PathBuf,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
        }
    }
}

impl BuildSectionConfig {
    /// Content directory must exist once paths are resolved.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                FieldPath::new("build.content"),
                format!("directory '{}' not found", self.content.display()),
                "set `content` under [build] or pass `--content <DIR>`",
            );
        }
    }
}
