//! Collection registry: classification and validation of content files.
//!
//! Built once at startup and shared read-only. Validation of one file never
//! depends on another, so callers may run it from any number of threads.

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use super::collection::{Collection, CollectionKind};
use super::document::{ContentFormat, RawDocument, markdown_summary};
use super::error::{ContentError, SchemaValidationError};
use super::schemas;
use crate::utils::path::rel_slash;

/// A document that passed its collection schema.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedDocument {
    /// Source file relative to the content directory.
    pub file: String,
    pub collection: &'static str,
    pub kind: CollectionKind,
    /// Route of a page document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data: Value,
}

/// Named collections with a source-pattern index.
#[derive(Debug, Clone)]
pub struct Registry {
    collections: Vec<Collection>,
    by_name: FxHashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry. Later duplicates of a name are ignored.
    pub fn new(collections: Vec<Collection>) -> Self {
        let mut by_name = FxHashMap::default();
        for (i, collection) in collections.iter().enumerate() {
            by_name.entry(collection.name).or_insert(i);
        }
        Self {
            collections,
            by_name,
        }
    }

    /// The portfolio site's six collections.
    pub fn standard() -> Self {
        Self::new(schemas::collections())
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.by_name.get(name).map(|&i| &self.collections[i])
    }

    /// Collection owning a content-relative path (`/`-separated).
    ///
    /// First match in declaration order wins.
    pub fn classify(&self, rel_path: &str) -> Option<&Collection> {
        self.collections
            .iter()
            .find(|c| c.source.matches(rel_path))
    }

    /// Validate a parsed document against a named collection's schema.
    ///
    /// `file` only labels errors; nothing is read from disk.
    pub fn validate(&self, name: &str, file: &Path, data: &Value) -> Result<Value, ContentError> {
        let collection = self
            .get(name)
            .ok_or_else(|| ContentError::UnknownCollection(name.to_string()))?;

        collection.schema.validate(data).map_err(|issues| ContentError::Invalid {
            collection: collection.name.to_string(),
            file: file.to_path_buf(),
            errors: issues
                .into_iter()
                .map(|issue| SchemaValidationError::from_issue(collection.name, file, issue))
                .collect(),
        })
    }

    /// Classify, read and validate one content file.
    ///
    /// Returns `Ok(None)` when the file belongs to no collection.
    pub fn load(
        &self,
        content_dir: &Path,
        file: &Path,
    ) -> Result<Option<ValidatedDocument>, ContentError> {
        let Some(rel) = rel_slash(file, content_dir) else {
            return Ok(None);
        };
        let Some(collection) = self.classify(&rel) else {
            return Ok(None);
        };

        let raw = RawDocument::read(file)?;
        self.accept(collection, rel, raw).map(Some)
    }

    /// Validate an already parsed document of a classified file.
    pub fn accept(
        &self,
        collection: &Collection,
        rel: String,
        raw: RawDocument,
    ) -> Result<ValidatedDocument, ContentError> {
        let data = self.validate(collection.name, Path::new(&rel), &raw.data)?;

        let (path, title, description) = match collection.kind {
            CollectionKind::Data => (None, None, None),
            CollectionKind::Page => {
                let (title, description) = page_summary(&raw, &data);
                (Some(page_path(&rel)), title, description)
            }
        };

        Ok(ValidatedDocument {
            file: rel,
            collection: collection.name,
            kind: collection.kind,
            path,
            title,
            description,
            data,
        })
    }
}

/// Route of a page file: extension dropped, trailing `index` removed.
///
/// `index.yml` -> `/`, `blog/hello.md` -> `/blog/hello`
pub fn page_path(rel: &str) -> String {
    let stem = match rel.rfind('.') {
        Some(dot) if !rel[dot..].contains('/') => &rel[..dot],
        _ => rel,
    };

    let mut segments: Vec<_> = stem.split('/').filter(|s| !s.is_empty()).collect();
    if segments.last() == Some(&"index") {
        segments.pop();
    }
    format!("/{}", segments.join("/"))
}

/// Explicit `title`/`description` fields, falling back to the Markdown body.
fn page_summary(raw: &RawDocument, data: &Value) -> (Option<String>, Option<String>) {
    let field = |name: &str| data.get(name).and_then(Value::as_str).map(str::to_string);
    let (mut title, mut description) = (field("title"), field("description"));

    if raw.format == ContentFormat::Markdown
        && (title.is_none() || description.is_none())
        && let Some(body) = &raw.body
    {
        let (body_title, body_description) = markdown_summary(body);
        title = title.or(body_title);
        description = description.or(body_description);
    }

    (title, description)
}
