//! `[theme]` section configuration.
//!
//! Built-in defaults reproduce the portfolio's look; any field set in
//! `folio.toml` replaces the default at that position.
//!
//! | Module   | TOML Section       | Purpose                               |
//! |----------|--------------------|---------------------------------------|
//! | `global` | `[theme.global]`   | Profile picture, meeting link, email  |
//! | `ui`     | `[theme.ui]`       | Colors and component style slots      |
//! | `footer` | `[theme.footer]`   | Credits, color mode switch, links     |

mod footer;
mod global;
mod ui;

use footer::FooterConfig;
use global::GlobalConfig;
use ui::UiConfig;

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    pub global: GlobalConfig,
    pub ui: UiConfig,
    pub footer: FooterConfig,
}

impl ThemeSectionConfig {
    /// Render year-dependent values.
    pub fn evaluate(&mut self, year: u16) {
        self.footer.evaluate_credits(year);
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.global.validate(diag);
        self.footer.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_shape() {
        let mut theme = ThemeSectionConfig::default();
        theme.evaluate(2025);

        let json = serde_json::to_value(&theme).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["global", "ui", "footer"]);
        assert_eq!(json["global"]["meetingLink"], "https://cal.com/");
        assert_eq!(json["ui"]["colors"]["primary"], "orange");
        assert_eq!(json["footer"]["credits"], "Built with Nuxt UI • © 2025");
    }

    #[test]
    fn test_defaults_produce_no_warnings() {
        let mut diag = ConfigDiagnostics::new();
        ThemeSectionConfig::default().validate(&mut diag);
        assert!(diag.warnings().is_empty());
    }
}
