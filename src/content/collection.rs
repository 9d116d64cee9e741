//! Collection definitions: a name, a storage kind, a source pattern and a schema.

use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::schema::Schema;

/// How documents of a collection are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// Each file renders as a navigable page.
    Page,
    /// Structured data with no standalone page.
    Data,
}

impl CollectionKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Data => "data",
        }
    }
}

/// Files belonging to a collection, relative to the content directory.
///
/// Patterns use `/` separators. `*` and `?` stay within one path segment,
/// `**` crosses segments.
#[derive(Debug, Clone)]
pub struct Source {
    patterns: Vec<Pattern>,
}

#[derive(Debug, Clone)]
struct Pattern {
    glob: &'static str,
    matcher: Regex,
}

impl Source {
    /// A single file or glob, e.g. `index.yml` or `projects/*.yml`.
    pub fn new(glob: &'static str) -> Self {
        Self::include(&[glob])
    }

    /// An explicit include list.
    pub fn include(globs: &[&'static str]) -> Self {
        Self {
            patterns: globs
                .iter()
                .map(|&glob| Pattern {
                    glob,
                    matcher: glob_to_regex(glob),
                })
                .collect(),
        }
    }

    /// Check a content-relative path (with `/` separators).
    pub fn matches(&self, rel_path: &str) -> bool {
        self.patterns.iter().any(|p| p.matcher.is_match(rel_path))
    }

    /// Raw patterns in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.glob)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let globs: Vec<_> = self.patterns().collect();
        write!(f, "{}", globs.join(", "))
    }
}

/// Compile a glob into an anchored regex.
fn glob_to_regex(glob: &str) -> Regex {
    let mut re = String::from("^");
    let mut chars = glob.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    chars.next();
                    re.push_str("(?:[^/]+/)*");
                } else {
                    re.push_str(".*");
                }
            }
            '*' => re.push_str("[^/]*"),
            '?' => re.push_str("[^/]"),
            _ => re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    re.push('$');
    // Every literal is escaped, so the pattern is always valid.
    Regex::new(&re).unwrap()
}

/// A named group of content documents sharing one source and one schema.
#[derive(Debug, Clone)]
pub struct Collection {
    pub name: &'static str,
    pub kind: CollectionKind,
    pub source: Source,
    pub schema: Schema,
}

impl Collection {
    pub fn new(name: &'static str, kind: CollectionKind, source: Source, schema: Schema) -> Self {
        Self {
            name,
            kind,
            source,
            schema,
        }
    }
}
