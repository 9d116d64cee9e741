//! Theme command: print the resolved theme configuration, or the class
//! string of one component slot with `--class`.

use anyhow::{Result, bail};

use crate::cli::args::ThemeArgs;
use crate::config::{SiteConfig, ThemeSectionConfig};

/// Print the theme as JSON, optionally re-rendering credits for `--year`.
pub fn print_theme(args: &ThemeArgs, config: &SiteConfig) -> Result<()> {
    if let Some([component, slot]) = args.class.as_deref() {
        println!("{}", slot_class(&config.theme, component, slot, args)?);
        return Ok(());
    }

    let theme = resolve(&config.theme, args.year);

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&theme)?
    } else {
        serde_json::to_string(&theme)?
    };
    println!("{formatted}");
    Ok(())
}

/// Classes of `component`'s `slot` under the `--option` selections.
fn slot_class(
    theme: &ThemeSectionConfig,
    component: &str,
    slot: &str,
    args: &ThemeArgs,
) -> Result<String> {
    let Some(component_theme) = theme.ui.component(component) else {
        bail!("unknown component `{component}` (expected button, card or pageHero)");
    };
    let options: Vec<(&str, &str)> = args
        .options
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    Ok(component_theme.class(slot, &options, args.extra.as_deref()))
}

fn resolve(theme: &ThemeSectionConfig, year: Option<u16>) -> ThemeSectionConfig {
    let mut theme = theme.clone();
    if let Some(year) = year {
        theme.evaluate(year);
    }
    theme
}
