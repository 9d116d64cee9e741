//! Validation walk.
//!
//! Pure function of `(schema, value)`: collects every violation instead of
//! stopping at the first one, and returns the narrowed document on success.

use serde_json::Value;

use super::{Issue, Kind, Schema, index_path, key_path};
use crate::utils::date::DateTimeUtc;

impl Schema {
    /// Validate a document.
    ///
    /// On success the document is returned unchanged apart from date
    /// narrowing. On failure every offending field is reported.
    pub fn validate(&self, value: &Value) -> Result<Value, Vec<Issue>> {
        let mut issues = Vec::new();
        let narrowed = self.check(value, "", &mut issues);

        if issues.is_empty() {
            Ok(narrowed)
        } else {
            Err(issues)
        }
    }

    fn check(&self, value: &Value, path: &str, issues: &mut Vec<Issue>) -> Value {
        match (&self.kind, value) {
            (Kind::String { nonempty }, Value::String(s)) => {
                if *nonempty && s.is_empty() {
                    issues.push(Issue::mismatch(path, self.describe(), value));
                }
                value.clone()
            }

            (Kind::Number, Value::Number(_)) => value.clone(),

            (Kind::Date, Value::String(s)) => match DateTimeUtc::parse(s) {
                Some(dt) => Value::String(dt.to_iso()),
                None => {
                    issues.push(Issue::mismatch(path, self.describe(), value));
                    value.clone()
                }
            },

            (Kind::Enum(values), Value::String(s)) if values.iter().any(|v| v == s) => {
                value.clone()
            }

            (Kind::Array(item), Value::Array(items)) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| item.check(v, &index_path(path, i), issues))
                    .collect(),
            ),

            (Kind::Object(fields), Value::Object(map)) => {
                let mut out = map.clone();
                for (name, schema) in fields {
                    let child = key_path(path, name);
                    match map.get(*name) {
                        Some(v) => {
                            let narrowed = schema.check(v, &child, issues);
                            out.insert((*name).to_string(), narrowed);
                        }
                        None if schema.optional => {}
                        None => issues.push(Issue::missing(&child, schema.describe())),
                    }
                }
                Value::Object(out)
            }

            _ => {
                issues.push(Issue::mismatch(path, self.describe(), value));
                value.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::{Editor, array, date, literal, number, object, string};
    use serde_json::json;

    #[test]
    fn test_required_and_optional() {
        let schema = object([("label", string()), ("icon", string().optional())]);

        assert!(schema.validate(&json!({ "label": "Go" })).is_ok());
        assert!(schema.validate(&json!({ "label": "Go", "icon": "i-x" })).is_ok());

        let issues = schema.validate(&json!({ "icon": "i-x" })).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "label");
        assert_eq!(issues[0].actual, "missing");
    }

    #[test]
    fn test_optional_rejects_null() {
        let schema = object([("url", string().optional())]);
        let issues = schema.validate(&json!({ "url": null })).unwrap_err();
        assert_eq!(issues[0].path, "url");
        assert_eq!(issues[0].actual, "null");
    }

    #[test]
    fn test_enum_is_exact() {
        let schema = literal(&["Live talk", "Podcast"]);
        assert!(schema.validate(&json!("Podcast")).is_ok());
        assert!(schema.validate(&json!("podcast")).is_err());
        assert!(schema.validate(&json!("Live Talk")).is_err());
        assert!(schema.validate(&json!(1)).is_err());
    }

    #[test]
    fn test_nonempty() {
        let schema = string().nonempty();
        assert!(schema.validate(&json!("x")).is_ok());
        let issues = schema.validate(&json!("")).unwrap_err();
        assert_eq!(issues[0].expected, "non-empty string");
        assert_eq!(issues[0].actual, "empty string");
    }

    #[test]
    fn test_number_does_not_coerce_strings() {
        assert!(number().validate(&json!(5)).is_ok());
        assert!(number().validate(&json!(2.5)).is_ok());
        assert!(number().validate(&json!("5")).is_err());
    }

    #[test]
    fn test_date_is_narrowed() {
        let schema = object([("date", date())]);
        let doc = schema
            .validate(&json!({ "date": "2024-06-15 09:00:00" }))
            .unwrap();
        assert_eq!(doc["date"], "2024-06-15T09:00:00Z");

        assert!(schema.validate(&json!({ "date": "June 15" })).is_err());
        assert!(schema.validate(&json!({ "date": 20240615 })).is_err());
    }

    #[test]
    fn test_array_elements_checked_independently() {
        let schema = array(object([("title", string())]));
        assert!(schema.validate(&json!([])).is_ok());

        let issues = schema
            .validate(&json!([{ "title": "a" }, {}, { "title": 3 }]))
            .unwrap_err();
        let paths: Vec<_> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, ["[1].title", "[2].title"]);
    }

    #[test]
    fn test_nested_paths() {
        let schema = object([(
            "hero",
            object([("links", array(object([("label", string())])))]),
        )]);
        let issues = schema
            .validate(&json!({ "hero": { "links": [{ "label": "ok" }, { "label": false }] } }))
            .unwrap_err();
        assert_eq!(issues[0].path, "hero.links[1].label");
        assert_eq!(issues[0].actual, "boolean `false`");
    }

    #[test]
    fn test_unknown_keys_kept_and_order_preserved() {
        let schema = object([("b", string())]);
        let input = json!({ "z": 1, "b": "x", "a": [true] });
        let doc = schema.validate(&input).unwrap();
        assert_eq!(doc, input);
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["z", "b", "a"]);
    }

    #[test]
    fn test_empty_object_schema_accepts_any_object() {
        let schema = object([]);
        assert!(schema.validate(&json!({})).is_ok());
        assert!(schema.validate(&json!({ "anything": [1, 2] })).is_ok());
        assert!(schema.validate(&json!("text")).is_err());
    }

    #[test]
    fn test_editor_hint_does_not_affect_validation() {
        let plain = object([("src", string())]);
        let hinted = object([("src", string().editor(Editor::Media))]);
        for doc in [json!({ "src": "/a.png" }), json!({ "src": 1 }), json!({})] {
            assert_eq!(plain.validate(&doc).is_ok(), hinted.validate(&doc).is_ok());
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let schema = object([("date", date()), ("tags", array(string()))]);
        let first = schema
            .validate(&json!({ "date": "2024-01-01T00:00:00", "tags": [] }))
            .unwrap();
        let text = serde_json::to_string(&first).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(schema.validate(&reparsed).unwrap(), first);
    }

    #[test]
    fn test_all_issues_collected() {
        let schema = object([("a", string()), ("b", number()), ("c", date())]);
        let issues = schema.validate(&json!({})).unwrap_err();
        assert_eq!(issues.len(), 3);
    }
}
