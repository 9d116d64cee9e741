//! `[theme.footer]` configuration: credits line, color mode toggle, links.
//!
//! # Example
//!
//! ```toml
//! [theme.footer]
//! credits = "Made by Ada • © {year}"
//! colorMode = true
//!
//! [[theme.footer.links]]
//! icon = "i-simple-icons-github"
//! to = "https://github.com/ada"
//! target = "_blank"
//! aria-label = "Ada on GitHub"
//! ```

use crate::config::util::is_absolute_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the calendar year.
pub const YEAR_PLACEHOLDER: &str = "{year}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterConfig {
    /// Credits text. Holds the template until [`FooterConfig::evaluate_credits`]
    /// runs, the rendered line afterwards.
    pub credits: String,

    #[serde(skip)]
    credits_template: Option<String>,

    /// Show the color mode switch.
    pub color_mode: bool,

    pub links: Vec<FooterLink>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            credits: "Built with Nuxt UI • © {year}".into(),
            credits_template: None,
            color_mode: false,
            links: vec![
                FooterLink::new(
                    "i-simple-icons-discord",
                    "https://go.nuxt.com/discord",
                    "Nuxt on Discord",
                ),
                FooterLink::new("i-simple-icons-x", "https://go.nuxt.com/x", "Nuxt on X"),
                FooterLink::new(
                    "i-simple-icons-github",
                    "https://github.com/nuxt/ui",
                    "Nuxt UI on GitHub",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub icon: String,
    pub to: String,
    #[serde(default)]
    pub target: LinkTarget,
    #[serde(rename = "aria-label")]
    pub aria_label: String,
}

impl FooterLink {
    fn new(icon: &str, to: &str, aria_label: &str) -> Self {
        Self {
            icon: icon.into(),
            to: to.into(),
            target: LinkTarget::Blank,
            aria_label: aria_label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfTab,
}

/// Substitute the year into a credits template.
pub fn render_credits(template: &str, year: u16) -> String {
    template.replace(YEAR_PLACEHOLDER, &year.to_string())
}

impl FooterConfig {
    /// Render the credits line for `year`.
    ///
    /// The template is kept, so calling again with another year re-renders
    /// from the unrendered template.
    pub fn evaluate_credits(&mut self, year: u16) {
        if self.credits_template.is_none() {
            self.credits_template = Some(self.credits.clone());
        }
        if let Some(template) = &self.credits_template {
            self.credits = render_credits(template, year);
        }
    }

    /// Credits text before year substitution.
    pub fn credits_template(&self) -> &str {
        self.credits_template.as_deref().unwrap_or(&self.credits)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, link) in self.links.iter().enumerate() {
            if !is_absolute_url(&link.to) {
                diag.warn(
                    FieldPath::new("theme.footer.links.to"),
                    format!("link #{}: `{}` is not an absolute URL", i + 1, link.to),
                );
            }
            if link.aria_label.trim().is_empty() {
                diag.warn(
                    FieldPath::new("theme.footer.links.aria-label"),
                    format!("link #{} (`{}`) has an empty label", i + 1, link.icon),
                );
            }
        }
    }
}
