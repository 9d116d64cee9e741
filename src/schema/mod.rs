//! Declarative document schemas.
//!
//! A [`Schema`] is an immutable validator value built from small combinator
//! functions and shared freely across threads:
//!
//! ```ignore
//! let image = object([
//!     ("src", string().editor(Editor::Media)),
//!     ("alt", string()),
//!     ("srcset", string().optional()),
//! ]);
//!
//! let doc = image.validate(&json!({ "src": "/a.png", "alt": "A" }))?;
//! ```
//!
//! Composition is by value: a sub-schema function returns a fresh `Schema`
//! which callers embed or [`extend`](Schema::extend).

mod check;
mod issue;

pub use issue::Issue;

use serde::Serialize;

/// Authoring-tool hint attached to a field.
///
/// Tells an editor which input widget to present. Validation never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Editor {
    /// Media picker (image sources).
    Media,
}

impl Editor {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Media => "media",
        }
    }
}

/// Shape constraint of a schema node.
#[derive(Debug, Clone)]
pub enum Kind {
    String { nonempty: bool },
    Number,
    /// Date string, narrowed to `YYYY-MM-DD` / `YYYY-MM-DDTHH:MM:SSZ`.
    Date,
    /// Exact, case-sensitive string literals.
    Enum(&'static [&'static str]),
    Array(Box<Schema>),
    /// Declared fields; undeclared keys are kept as-is.
    Object(Vec<(&'static str, Schema)>),
}

/// An immutable validator for one document node.
#[derive(Debug, Clone)]
pub struct Schema {
    kind: Kind,
    optional: bool,
    editor: Option<Editor>,
}

impl Schema {
    const fn new(kind: Kind) -> Self {
        Self {
            kind,
            optional: false,
            editor: None,
        }
    }

    /// Allow the field to be absent from its parent object.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Reject empty strings. No effect on non-string schemas.
    pub fn nonempty(mut self) -> Self {
        if let Kind::String { nonempty } = &mut self.kind {
            *nonempty = true;
        }
        self
    }

    /// Attach an editor hint.
    pub fn editor(mut self, editor: Editor) -> Self {
        self.editor = Some(editor);
        self
    }

    /// Add fields to an object schema, replacing fields with the same name.
    /// No effect on non-object schemas.
    pub fn extend(mut self, extra: impl IntoIterator<Item = (&'static str, Schema)>) -> Self {
        if let Kind::Object(fields) = &mut self.kind {
            for (name, schema) in extra {
                fields.retain(|(existing, _)| *existing != name);
                fields.push((name, schema));
            }
        }
        self
    }

    pub const fn kind(&self) -> &Kind {
        &self.kind
    }

    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    pub const fn editor_hint(&self) -> Option<Editor> {
        self.editor
    }

    /// Look up a declared field of an object schema.
    pub fn field(&self, name: &str) -> Option<&Schema> {
        match &self.kind {
            Kind::Object(fields) => fields.iter().find(|(n, _)| *n == name).map(|(_, s)| s),
            _ => None,
        }
    }

    /// Human-readable constraint, used as the "expected" side of an issue.
    pub fn describe(&self) -> String {
        match &self.kind {
            Kind::String { nonempty: false } => "string".to_string(),
            Kind::String { nonempty: true } => "non-empty string".to_string(),
            Kind::Number => "number".to_string(),
            Kind::Date => "date (YYYY-MM-DD)".to_string(),
            Kind::Enum(values) => {
                let list: Vec<_> = values.iter().map(|v| format!("`{v}`")).collect();
                format!("one of {}", list.join(", "))
            }
            Kind::Array(item) => format!("array of {}", item.describe()),
            Kind::Object(_) => "object".to_string(),
        }
    }

    /// All fields carrying an editor hint, with `[]` marking array elements.
    ///
    /// ```ignore
    /// index.editor_fields() == [("hero.images[].src", Editor::Media)]
    /// ```
    pub fn editor_fields(&self) -> Vec<(String, Editor)> {
        let mut out = Vec::new();
        self.collect_editor_fields("", &mut out);
        out
    }

    fn collect_editor_fields(&self, path: &str, out: &mut Vec<(String, Editor)>) {
        if let Some(editor) = self.editor {
            out.push((path.to_string(), editor));
        }
        match &self.kind {
            Kind::Array(item) => item.collect_editor_fields(&format!("{path}[]"), out),
            Kind::Object(fields) => {
                for (name, schema) in fields {
                    schema.collect_editor_fields(&key_path(path, name), out);
                }
            }
            _ => {}
        }
    }
}

// ============================================================================
// combinators
// ============================================================================

pub const fn string() -> Schema {
    Schema::new(Kind::String { nonempty: false })
}

pub const fn number() -> Schema {
    Schema::new(Kind::Number)
}

pub const fn date() -> Schema {
    Schema::new(Kind::Date)
}

/// One of a fixed set of string literals.
pub const fn literal(values: &'static [&'static str]) -> Schema {
    Schema::new(Kind::Enum(values))
}

pub fn array(item: Schema) -> Schema {
    Schema::new(Kind::Array(Box::new(item)))
}

pub fn object(fields: impl IntoIterator<Item = (&'static str, Schema)>) -> Schema {
    Schema::new(Kind::Object(fields.into_iter().collect()))
}

// ============================================================================
// field paths
// ============================================================================

/// `hero` + `links` -> `hero.links`
fn key_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// `events` + 2 -> `events[2]`
fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_replaces_same_name() {
        let base = object([("title", string()), ("description", string())]);
        let extended = base.extend([("title", string().nonempty()), ("steps", array(string()))]);

        let Kind::Object(fields) = extended.kind() else {
            panic!("expected object");
        };
        let names: Vec<_> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["description", "title", "steps"]);
        assert_eq!(
            extended.field("title").unwrap().describe(),
            "non-empty string"
        );
    }

    #[test]
    fn test_nonempty_only_affects_strings() {
        assert_eq!(number().nonempty().describe(), "number");
        assert_eq!(string().nonempty().describe(), "non-empty string");
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            literal(&["xs", "sm"]).describe(),
            "one of `xs`, `sm`"
        );
        assert_eq!(array(string()).describe(), "array of string");
        assert_eq!(date().describe(), "date (YYYY-MM-DD)");
    }

    #[test]
    fn test_editor_fields() {
        let image = object([("src", string().editor(Editor::Media)), ("alt", string())]);
        let page = object([
            ("cover", string().editor(Editor::Media)),
            ("gallery", array(image)),
        ]);
        assert_eq!(
            page.editor_fields(),
            vec![
                ("cover".to_string(), Editor::Media),
                ("gallery[].src".to_string(), Editor::Media),
            ]
        );
    }

    #[test]
    fn test_schema_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
    }
}
