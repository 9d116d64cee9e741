//! Schema violations.

use serde_json::Value;
use std::fmt;

use crate::utils::plural_count;

/// A single field that failed its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Field path such as `hero.links` or `events[2].category`; empty for the root.
    pub path: String,
    /// The constraint the field had to satisfy.
    pub expected: String,
    /// What was found instead.
    pub actual: String,
}

impl Issue {
    pub(super) fn mismatch(path: &str, expected: String, value: &Value) -> Self {
        Self {
            path: path.to_string(),
            expected,
            actual: describe_value(value),
        }
    }

    pub(super) fn missing(path: &str, expected: String) -> Self {
        Self {
            path: path.to_string(),
            expected,
            actual: "missing".to_string(),
        }
    }

    /// Path for display, `(root)` for the document itself.
    pub fn display_path(&self) -> &str {
        if self.path.is_empty() {
            "(root)"
        } else {
            &self.path
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` expected {}, found {}",
            self.display_path(),
            self.expected,
            self.actual
        )
    }
}

/// Short description of a document value for error messages.
pub fn describe_value(value: &Value) -> String {
    const MAX_CHARS: usize = 40;

    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean `{b}`"),
        Value::Number(n) => format!("number `{n}`"),
        Value::String(s) if s.is_empty() => "empty string".to_string(),
        Value::String(s) if s.chars().count() > MAX_CHARS => {
            let head: String = s.chars().take(MAX_CHARS).collect();
            format!("string \"{head}…\"")
        }
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(items) => format!("array of {}", plural_count(items.len(), "item")),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(&json!(null)), "null");
        assert_eq!(describe_value(&json!(true)), "boolean `true`");
        assert_eq!(describe_value(&json!(5)), "number `5`");
        assert_eq!(describe_value(&json!("")), "empty string");
        assert_eq!(describe_value(&json!("Webinar")), "string \"Webinar\"");
        assert_eq!(describe_value(&json!(["a"])), "array of 1 item");
        assert_eq!(describe_value(&json!({})), "object");
    }

    #[test]
    fn test_describe_long_string_truncated() {
        let long = "x".repeat(100);
        let described = describe_value(&json!(long));
        assert!(described.ends_with("…\""));
        assert!(described.len() < 60);
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::missing("hero.links", "array of object".to_string());
        assert_eq!(
            issue.to_string(),
            "`hero.links` expected array of object, found missing"
        );

        let root = Issue::mismatch("", "object".to_string(), &json!([]));
        assert_eq!(root.to_string(), "`(root)` expected object, found array of 0 items");
    }
}
