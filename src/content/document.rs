//! Content file parsing.
//!
//! - `.yml` / `.yaml`: the whole file is the document.
//! - `.md` / `.markdown`: YAML front matter between `---` fences is the
//!   document; the remaining body is kept for page title/description.
//!
//! Both are converted into a `serde_json::Value` tree for validation.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::error::ContentError;

/// Supported content file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Yaml,
    Markdown,
}

impl ContentFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Display name, also used as progress counter label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Markdown => "markdown",
        }
    }
}

/// A parsed, not yet validated, content file.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub format: ContentFormat,
    /// YAML data or Markdown front matter.
    pub data: Value,
    /// Markdown body after the front matter.
    pub body: Option<String>,
}

impl RawDocument {
    /// Read and parse a content file.
    pub fn read(path: &Path) -> Result<Self, ContentError> {
        let format = ContentFormat::from_path(path).ok_or_else(|| ContentError::Parse {
            file: path.to_path_buf(),
            message: "unsupported file extension".to_string(),
        })?;
        let content =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;

        Self::parse(format, &content).map_err(|message| ContentError::Parse {
            file: path.to_path_buf(),
            message,
        })
    }

    /// Parse file content of a known format.
    pub fn parse(format: ContentFormat, content: &str) -> Result<Self, String> {
        match format {
            ContentFormat::Yaml => Ok(Self {
                format,
                data: parse_yaml(content)?,
                body: None,
            }),
            ContentFormat::Markdown => {
                let (data, body) = match split_frontmatter(content) {
                    Some((fm, body)) => (parse_yaml(fm)?, body),
                    None => (Value::Object(Map::new()), content),
                };
                // `---\n---` yields null; treat as empty front matter
                let data = if data.is_null() {
                    Value::Object(Map::new())
                } else {
                    data
                };
                Ok(Self {
                    format,
                    data,
                    body: Some(body.to_string()),
                })
            }
        }
    }
}

/// Split `---` fenced front matter from the body.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();
    let rest = trimmed.strip_prefix("---")?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    let rest = rest.strip_prefix('\n')?;

    // closing fence is a line holding exactly `---`
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Some((&rest[..offset], body));
        }
        offset += line.len();
    }
    None
}

fn parse_yaml(content: &str) -> Result<Value, String> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    yaml_to_json(yaml)
}

/// Convert a YAML tree into JSON.
///
/// Scalar mapping keys are stringified; tags are dropped.
fn yaml_to_json(yaml: serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent number `{n}`"))?
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(seq) => Value::Array(
            seq.into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(map) => {
            let mut out = Map::with_capacity(map.len());
            for (k, v) in map {
                let key = match k {
                    Yaml::String(s) => s,
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported mapping key: {other:?}")),
                };
                out.insert(key, yaml_to_json(v)?);
            }
            Value::Object(out)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

/// First `#` heading and first paragraph of a Markdown body, as plain text.
pub fn markdown_summary(body: &str) -> (Option<String>, Option<String>) {
    enum Capture {
        Title(String),
        Description(String),
    }

    let mut title = None;
    let mut description = None;
    let mut current: Option<Capture> = None;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if title.is_none() => current = Some(Capture::Title(String::new())),
            Event::Start(Tag::Paragraph) if description.is_none() && current.is_none() => {
                current = Some(Capture::Description(String::new()));
            }
            Event::Text(text) | Event::Code(text) => match &mut current {
                Some(Capture::Title(buf) | Capture::Description(buf)) => buf.push_str(&text),
                None => {}
            },
            Event::SoftBreak | Event::HardBreak => match &mut current {
                Some(Capture::Title(buf) | Capture::Description(buf)) => buf.push(' '),
                None => {}
            },
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if let Some(Capture::Title(buf)) = current.take() {
                    title = Some(buf.trim().to_string());
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if let Some(Capture::Description(buf)) = current.take() {
                    description = Some(buf.trim().to_string());
                }
            }
            _ => {}
        }

        if title.is_some() && description.is_some() {
            break;
        }
    }

    (title, description)
}
