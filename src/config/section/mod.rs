//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module     | TOML Section   | Purpose                             |
//! |------------|----------------|-------------------------------------|
//! | `build`    | `[build]`      | Content directory                   |
//! | `theme`    | `[theme]`      | Theme overrides (global, ui, footer)|
//! | `validate` | `[validate]`   | Content validation settings         |

mod build;
pub mod theme;
mod validate;

pub use build::BuildSectionConfig;
pub use theme::ThemeSectionConfig;
pub use validate::{ValidateConfig, ValidateLevel};
