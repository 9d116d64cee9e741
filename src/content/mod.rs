//! Content collections.
//!
//! | Module       | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `collection` | Collection kind, source patterns, definition    |
//! | `schemas`    | Reusable sub-schemas and the six collections    |
//! | `registry`   | Classification and validation entry point       |
//! | `document`   | YAML / Markdown front matter parsing            |
//! | `error`      | `SchemaValidationError`, `ContentError`         |

mod collection;
mod document;
mod error;
mod registry;
pub mod schemas;


pub use collection::Collection;
pub use document::ContentFormat;
pub use error::{ContentError, SchemaValidationError};
pub use registry::{Registry, ValidatedDocument};
