//! `[validate]` section configuration.
//!
//! Configuration for the `folio validate` command.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! level = "error"             # Failure level: error | warn
//! unmatched = true            # Report content files matching no collection
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// How to treat schema violations: "error" or "warn".
    pub level: ValidateLevel,

    /// List content files that no collection claims.
    pub unmatched: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            level: ValidateLevel::default(),
            unmatched: true,
        }
    }
}

/// Validation error level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Treat validation failures as errors (non-zero exit).
    #[default]
    Error,
    /// Treat validation failures as warnings.
    Warn,
}
