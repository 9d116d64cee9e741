//! `[theme.ui]` configuration: color roles and component style overrides.
//!
//! A component theme maps named slots to utility class strings, with
//! per-option variants and compound variants that apply when several
//! options match at once.
//!
//! # Example
//!
//! ```toml
//! [theme.ui.colors]
//! primary = "orange"
//!
//! [theme.ui.button.slots]
//! base = "rounded-full font-medium"
//!
//! [[theme.ui.button.compoundVariants]]
//! color = "primary"
//! variant = "solid"
//! class = "text-white"
//!
//! [theme.ui.card.variants.variant.outline]
//! root = "glass border"
//! ```
//!
//! A component table only replaces the keys it sets: overriding `slots`
//! keeps the default `variants` and `compoundVariants`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slot name → class string.
pub type Slots = BTreeMap<String, String>;

/// Option → value → slot overrides.
pub type Variants = BTreeMap<String, BTreeMap<String, Slots>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UiOverlay", rename_all = "camelCase")]
pub struct UiConfig {
    pub colors: ColorsConfig,
    pub button: ComponentTheme,
    pub card: ComponentTheme,
    pub page_hero: ComponentTheme,
}

impl UiConfig {
    /// Component by its serialized name (`button`, `card`, `pageHero`).
    pub fn component(&self, name: &str) -> Option<&ComponentTheme> {
        match name {
            "button" => Some(&self.button),
            "card" => Some(&self.card),
            "pageHero" => Some(&self.page_hero),
            _ => None,
        }
    }
}

/// `[theme.ui]` as written in TOML; absent keys keep their defaults.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UiOverlay {
    colors: Option<ColorsConfig>,
    button: Option<ComponentOverlay>,
    card: Option<ComponentOverlay>,
    page_hero: Option<ComponentOverlay>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentOverlay {
    slots: Option<Slots>,
    variants: Option<Variants>,
    compound_variants: Option<Vec<CompoundVariant>>,
}

impl ComponentOverlay {
    fn apply(self, mut theme: ComponentTheme) -> ComponentTheme {
        if let Some(slots) = self.slots {
            theme.slots = slots;
        }
        if let Some(variants) = self.variants {
            theme.variants = variants;
        }
        if let Some(compound_variants) = self.compound_variants {
            theme.compound_variants = compound_variants;
        }
        theme
    }
}

fn overlay(component: Option<ComponentOverlay>, theme: ComponentTheme) -> ComponentTheme {
    match component {
        Some(component) => component.apply(theme),
        None => theme,
    }
}

impl From<UiOverlay> for UiConfig {
    fn from(overlay_config: UiOverlay) -> Self {
        let defaults = Self::default();
        Self {
            colors: overlay_config.colors.unwrap_or(defaults.colors),
            button: overlay(overlay_config.button, defaults.button),
            card: overlay(overlay_config.card, defaults.card),
            page_hero: overlay(overlay_config.page_hero, defaults.page_hero),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colors: ColorsConfig::default(),
            button: ComponentTheme::new()
                .slot(
                    "base",
                    "rounded-full font-medium inline-flex items-center disabled:cursor-not-allowed aria-disabled:cursor-not-allowed disabled:opacity-75 aria-disabled:opacity-75 transition-all",
                )
                .compound(
                    &[("color", "primary"), ("variant", "solid")],
                    "text-white gradient-primary-glow hover:shadow-[0_0_25px_rgba(246,81,47,0.5)] active:scale-[0.98] focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-primary",
                ),
            card: ComponentTheme::new()
                .slot("root", "glass rounded-lg overflow-hidden border border-primary/20")
                .variant(
                    "variant",
                    "outline",
                    "root",
                    "glass border border-primary/20 divide-y divide-primary/10",
                )
                .variant(
                    "variant",
                    "soft",
                    "root",
                    "glass-strong border border-primary/30 divide-y divide-primary/10",
                )
                .variant(
                    "variant",
                    "subtle",
                    "root",
                    "glass border border-primary/20 divide-y divide-primary/10",
                ),
            page_hero: ComponentTheme::new()
                .slot("container", "py-18 sm:py-24 lg:py-32")
                .slot(
                    "title",
                    "mx-auto max-w-xl text-pretty text-3xl sm:text-4xl lg:text-5xl font-heading",
                )
                .slot(
                    "description",
                    "mt-2 text-md mx-auto max-w-2xl text-pretty sm:text-md text-muted",
                ),
        }
    }
}

/// Color roles, each naming a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub primary: String,
    pub neutral: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            primary: "orange".into(),
            neutral: "neutral".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTheme {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub slots: Slots,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: Variants,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub compound_variants: Vec<CompoundVariant>,
}

/// Classes applied when every condition matches the selected options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundVariant {
    #[serde(flatten)]
    pub conditions: BTreeMap<String, String>,
    pub class: String,
}

impl CompoundVariant {
    fn matches(&self, options: &[(&str, &str)]) -> bool {
        self.conditions.iter().all(|(option, value)| {
            options
                .iter()
                .any(|&(name, selected)| name == option.as_str() && selected == value.as_str())
        })
    }
}

impl ComponentTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(mut self, slot: &str, class: &str) -> Self {
        self.slots.insert(slot.into(), class.into());
        self
    }

    pub fn variant(mut self, option: &str, value: &str, slot: &str, class: &str) -> Self {
        self.variants
            .entry(option.into())
            .or_default()
            .entry(value.into())
            .or_default()
            .insert(slot.into(), class.into());
        self
    }

    pub fn compound(mut self, conditions: &[(&str, &str)], class: &str) -> Self {
        self.compound_variants.push(CompoundVariant {
            conditions: conditions
                .iter()
                .map(|&(option, value)| (option.into(), value.into()))
                .collect(),
            class: class.into(),
        });
        self
    }

    /// Slot that receives compound variant classes.
    pub fn base_slot(&self) -> &'static str {
        if self.slots.contains_key("base") {
            "base"
        } else {
            "root"
        }
    }

    /// Resolve the class string for `slot` under the selected options.
    ///
    /// Pieces are appended in order: slot base, matching variants (in
    /// `options` order), matching compound variants (base slot only), then
    /// `extra`. Nothing is de-duplicated.
    pub fn class(&self, slot: &str, options: &[(&str, &str)], extra: Option<&str>) -> String {
        let mut pieces: Vec<&str> = Vec::new();

        pieces.extend(self.slots.get(slot).map(String::as_str));

        for (option, value) in options {
            let class = self
                .variants
                .get(*option)
                .and_then(|values| values.get(*value))
                .and_then(|slots| slots.get(slot));
            pieces.extend(class.map(String::as_str));
        }

        if slot == self.base_slot() {
            pieces.extend(
                self.compound_variants
                    .iter()
                    .filter(|compound| compound.matches(options))
                    .map(|compound| compound.class.as_str()),
            );
        }

        pieces.extend(extra);

        pieces
            .into_iter()
            .filter(|piece| !piece.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let ui = UiConfig::default();
        assert_eq!(ui.colors.primary, "orange");
        assert_eq!(ui.colors.neutral, "neutral");
        assert!(ui.button.slots["base"].starts_with("rounded-full"));
        assert_eq!(ui.button.compound_variants.len(), 1);
        assert_eq!(ui.card.variants["variant"].len(), 3);
        assert_eq!(ui.page_hero.slots.len(), 3);
    }

    #[test]
    fn test_class_order() {
        let theme = ComponentTheme::new()
            .slot("base", "b")
            .variant("size", "lg", "base", "v-lg")
            .variant("color", "primary", "base", "v-primary")
            .compound(&[("color", "primary"), ("size", "lg")], "c");

        assert_eq!(
            theme.class(
                "base",
                &[("size", "lg"), ("color", "primary")],
                Some("extra")
            ),
            "b v-lg v-primary c extra"
        );
        assert_eq!(theme.class("base", &[("size", "lg")], None), "b v-lg");
    }

    #[test]
    fn test_class_compound_base_slot_only() {
        let ui = UiConfig::default();
        let options = [("color", "primary"), ("variant", "solid")];

        let base = ui.button.class("base", &options, None);
        assert!(base.starts_with("rounded-full"));
        assert!(base.contains("gradient-primary-glow"));

        let outline = ui.button.class("base", &[("color", "primary"), ("variant", "outline")], None);
        assert!(!outline.contains("gradient-primary-glow"));

        assert_eq!(ui.button.class("leadingIcon", &options, None), "");
    }

    #[test]
    fn test_class_card_root_variant() {
        let ui = UiConfig::default();
        assert_eq!(
            ui.card.class("root", &[("variant", "soft")], Some("p-4")),
            "glass rounded-lg overflow-hidden border border-primary/20 glass-strong border border-primary/30 divide-y divide-primary/10 p-4"
        );
        assert_eq!(ui.card.base_slot(), "root");
    }

    #[test]
    fn test_class_unknown_slot_and_empty_extra() {
        let ui = UiConfig::default();
        assert_eq!(ui.page_hero.class("links", &[], Some("")), "");
        assert_eq!(ui.page_hero.class("container", &[], None), "py-18 sm:py-24 lg:py-32");
    }

    #[test]
    fn test_compound_variants_from_toml() {
        let config = test_parse_config(
            r#"
[theme.ui.button.slots]
base = "rounded-none"

[[theme.ui.button.compoundVariants]]
color = "neutral"
variant = "ghost"
class = "opacity-80"
"#,
        );
        let button = &config.theme.ui.button;
        assert_eq!(button.slots["base"], "rounded-none");
        assert_eq!(button.compound_variants.len(), 1);
        assert_eq!(button.compound_variants[0].conditions.len(), 2);
        assert_eq!(
            button.class("base", &[("variant", "ghost"), ("color", "neutral")], None),
            "rounded-none opacity-80"
        );
        // untouched components keep their defaults
        assert_eq!(config.theme.ui.card, UiConfig::default().card);
    }

    #[test]
    fn test_slot_override_keeps_other_defaults() {
        let config = test_parse_config(
            "[theme.ui.card.slots]\nroot = \"custom\"\n[theme.ui.button.slots]\nbase = \"b\"",
        );
        let (ui, defaults) = (&config.theme.ui, UiConfig::default());

        assert_eq!(ui.card.slots["root"], "custom");
        assert_eq!(ui.card.variants, defaults.card.variants);
        assert_eq!(ui.button.slots.len(), 1);
        assert_eq!(ui.button.compound_variants, defaults.button.compound_variants);
        assert_eq!(ui.page_hero, defaults.page_hero);
        assert_eq!(ui.colors, defaults.colors);

        assert_eq!(
            ui.button.class("base", &[("color", "primary"), ("variant", "solid")], None)
                .split(' ')
                .next(),
            Some("b")
        );
    }

    #[test]
    fn test_partial_colors_override() {
        let config = test_parse_config("[theme.ui.colors]\nprimary = \"teal\"");
        assert_eq!(config.theme.ui.colors.primary, "teal");
        assert_eq!(config.theme.ui.colors.neutral, "neutral");
        assert_eq!(config.theme.ui.button, UiConfig::default().button);
    }

    #[test]
    fn test_component_lookup() {
        let ui = UiConfig::default();
        assert_eq!(ui.component("pageHero"), Some(&ui.page_hero));
        assert_eq!(ui.component("card"), Some(&ui.card));
        assert!(ui.component("page_hero").is_none());
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_value(UiConfig::default()).unwrap();
        assert!(json.get("pageHero").is_some());
        let compound = &json["button"]["compoundVariants"][0];
        assert_eq!(compound["color"], "primary");
        assert_eq!(compound["variant"], "solid");
        assert!(compound["class"].as_str().unwrap().contains("text-white"));
    }
}
