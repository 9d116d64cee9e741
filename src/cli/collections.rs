//! Collections command: list the registry.

use owo_colors::OwoColorize;

use crate::content::{Collection, Registry};

/// Print one row per collection, followed by its media fields.
pub fn list_collections(registry: &Registry) {
    let width = registry
        .collections()
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);

    for collection in registry.collections() {
        println!("{}", row(collection, width));
        for (path, editor) in collection.schema.editor_fields() {
            println!(
                "{:width$}   {} {}",
                "",
                path.dimmed(),
                format!("({})", editor.name()).dimmed()
            );
        }
    }
}

fn row(collection: &Collection, width: usize) -> String {
    format!(
        "{:width$}  {:4}  {}",
        collection.name,
        collection.kind.name(),
        collection.source
    )
}
