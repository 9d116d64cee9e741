//! `[theme.global]` configuration: profile picture, meeting link, contact.
//!
//! # Example
//!
//! ```toml
//! [theme.global]
//! meetingLink = "https://cal.com/"
//! email = "hello@example.com"
//! available = true
//!
//! [theme.global.picture]
//! dark = "https://images.example.com/me-dark.jpg"
//! light = "https://images.example.com/me-light.jpg"
//! alt = "My profile picture"
//! ```

use crate::config::util::is_absolute_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const PROFILE_PICTURE: &str = "https://images.unsplash.com/photo-1701615004837-40d8573b6652?q=80&w=1480&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalConfig {
    pub picture: PictureConfig,

    /// Booking page linked from the hero.
    pub meeting_link: String,

    pub email: String,

    /// Shows the "available for work" badge.
    pub available: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            picture: PictureConfig::default(),
            meeting_link: "https://cal.com/".into(),
            email: "ui-pro@nuxt.com".into(),
            available: true,
        }
    }
}

/// Profile picture, one variant per color mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PictureConfig {
    pub dark: String,
    pub light: String,
    pub alt: String,
}

impl Default for PictureConfig {
    fn default() -> Self {
        Self {
            dark: PROFILE_PICTURE.into(),
            light: PROFILE_PICTURE.into(),
            alt: "My profile picture".into(),
        }
    }
}

impl GlobalConfig {
    /// Warn about values that will not work as links.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let urls = [
            (
                FieldPath::new("theme.global.picture.dark"),
                &self.picture.dark,
            ),
            (
                FieldPath::new("theme.global.picture.light"),
                &self.picture.light,
            ),
            (
                FieldPath::new("theme.global.meetingLink"),
                &self.meeting_link,
            ),
        ];
        for (field, value) in urls {
            if !is_absolute_url(value) {
                diag.warn(field, format!("`{value}` is not an absolute URL"));
            }
        }

        if !self.email.contains('@') {
            diag.warn(
                FieldPath::new("theme.global.email"),
                format!("`{}` does not look like an email address", self.email),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let global = &config.theme.global;
        assert_eq!(global.meeting_link, "https://cal.com/");
        assert_eq!(global.email, "ui-pro@nuxt.com");
        assert!(global.available);
        assert_eq!(global.picture.dark, global.picture.light);
        assert_eq!(global.picture.alt, "My profile picture");
    }

    #[test]
    fn test_partial_override() {
        let config = test_parse_config(
            r#"
[theme.global]
meetingLink = "https://cal.com/ada"
available = false

[theme.global.picture]
alt = "Ada"
"#,
        );
        let global = &config.theme.global;
        assert_eq!(global.meeting_link, "https://cal.com/ada");
        assert!(!global.available);
        assert_eq!(global.email, "ui-pro@nuxt.com");
        assert_eq!(global.picture.alt, "Ada");
        assert!(global.picture.dark.starts_with("https://images.unsplash.com/"));
    }

    #[test]
    fn test_validate_defaults_clean() {
        let mut diag = ConfigDiagnostics::new();
        test_parse_config("").theme.global.validate(&mut diag);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_warnings() {
        let config = test_parse_config(
            r#"
[theme.global]
meetingLink = "cal.com/ada"
email = "ada.example.com"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme.global.validate(&mut diag);

        let fields: Vec<_> = diag.warnings().iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fields, ["theme.global.meetingLink", "theme.global.email"]);
        assert!(!diag.has_errors());
    }
}
