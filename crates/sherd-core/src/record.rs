//! Raw catalogue record access.
//!
//! Catalogue exports put the same logical field in several shapes: a plain
//! string, a list of strings, a `{"def": ...}` wrapper object, a list of
//! wrappers, or nothing at all. [`FieldValue`] models those shapes as a closed
//! enum and [`RawItem`] hands them out without ever failing on a missing or
//! oddly shaped field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::defaults::MAX_TEXT_CHARS;
use crate::error::{Error, Result};

/// Key used by wrapper objects such as `{"def": "Delft"}`.
pub const WRAPPER_KEY: &str = "def";

/// Free-text fields, in the order they are joined by [`RawItem::assemble_text`].
pub const FREE_TEXT_FIELDS: &[&str] = &[
    "dcDescription",
    "description",
    "dcTitle",
    "title",
    "edmConceptLabel",
    "conceptLabel",
];

/// One field of a raw record, normalised into an exhaustive shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Field missing, null, or an object without a `def` key.
    #[default]
    Absent,
    /// A bare scalar (numbers and booleans are rendered as strings).
    Scalar(String),
    /// A `{"def": "..."}` wrapper object.
    Wrapped(String),
    /// A list of any of the above, possibly nested.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Classify an arbitrary JSON value.
    pub fn from_json(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Absent,
            JsonValue::String(s) => Self::from_scalar(s),
            JsonValue::Number(n) => Self::Scalar(n.to_string()),
            JsonValue::Bool(b) => Self::Scalar(b.to_string()),
            JsonValue::Array(items) => Self::List(items.iter().map(Self::from_json).collect()),
            JsonValue::Object(map) => match map.get(WRAPPER_KEY) {
                Some(JsonValue::String(s)) => Self::Wrapped(s.clone()),
                Some(JsonValue::Array(items)) => Self::List(
                    items
                        .iter()
                        .map(|item| match item {
                            JsonValue::String(s) => Self::Wrapped(s.clone()),
                            other => Self::from_json(other),
                        })
                        .collect(),
                ),
                Some(other) => Self::from_json(other),
                None => Self::Absent,
            },
        }
    }

    /// Strings exported by some harvesters carry a serialized wrapper such as
    /// `{'def': 'Delft'}`; unwrap those, keep everything else verbatim.
    fn from_scalar(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.starts_with('{') && trimmed.contains(WRAPPER_KEY) {
            if let Ok(JsonValue::Object(map)) =
                serde_json::from_str::<JsonValue>(&trimmed.replace('\'', "\""))
            {
                if let Some(JsonValue::String(inner)) = map.get(WRAPPER_KEY) {
                    return Self::Wrapped(inner.clone());
                }
            }
        }
        Self::Scalar(s.to_string())
    }

    /// True when the field carried nothing usable.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::List(items) => items.iter().all(Self::is_absent),
            Self::Scalar(_) | Self::Wrapped(_) => false,
        }
    }

    /// Flatten to the non-blank strings the field contains, in document order.
    pub fn flatten(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            Self::Absent => {}
            Self::Scalar(s) | Self::Wrapped(s) => {
                if !s.trim().is_empty() {
                    out.push(s.clone());
                }
            }
            Self::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

/// A heterogeneous catalogue record (one JSON object).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawItem {
    fields: Map<String, JsonValue>,
}

impl RawItem {
    /// Wrap a JSON value. Only objects are records.
    pub fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(fields) => Ok(Self { fields }),
            other => Err(Error::InvalidInput(format!(
                "record must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a record from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Borrow the raw JSON value of a field.
    pub fn raw(&self, name: &str) -> Option<&JsonValue> {
        self.fields.get(name)
    }

    /// True when the field key is present at all (even if empty).
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Classified view of a top-level field.
    pub fn field(&self, name: &str) -> FieldValue {
        self.fields
            .get(name)
            .map(FieldValue::from_json)
            .unwrap_or_default()
    }

    /// Classified view of a nested field, e.g. `["Metadata_for_Management", "Period"]`.
    pub fn nested(&self, path: &[&str]) -> FieldValue {
        let Some((first, rest)) = path.split_first() else {
            return FieldValue::Absent;
        };
        let mut current = match self.fields.get(*first) {
            Some(value) => value,
            None => return FieldValue::Absent,
        };
        for key in rest {
            match current.get(*key) {
                Some(value) => current = value,
                None => return FieldValue::Absent,
            }
        }
        FieldValue::from_json(current)
    }

    /// Flattened strings of a field.
    pub fn strings(&self, name: &str) -> Vec<String> {
        self.field(name).flatten()
    }

    /// First flattened string of a field, if any.
    pub fn first_string(&self, name: &str) -> Option<String> {
        self.strings(name).into_iter().next()
    }

    /// Record identifier, or an empty string when the record has none.
    pub fn id(&self) -> String {
        self.first_string("id").unwrap_or_default()
    }

    /// Join the free-text fields into one string.
    ///
    /// Values are taken in [`FREE_TEXT_FIELDS`] order, separated by single
    /// spaces, and truncated to [`MAX_TEXT_CHARS`] characters.
    pub fn assemble_text(&self) -> String {
        self.assemble_text_with_limit(MAX_TEXT_CHARS)
    }

    /// [`RawItem::assemble_text`] with an explicit character limit.
    pub fn assemble_text_with_limit(&self, max_chars: usize) -> String {
        let combined = FREE_TEXT_FIELDS
            .iter()
            .flat_map(|name| self.strings(name))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match combined.char_indices().nth(max_chars) {
            Some((idx, _)) => combined[..idx].to_string(),
            None => combined,
        }
    }
}

impl TryFrom<JsonValue> for RawItem {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self> {
        Self::from_value(value)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_shapes() {
        assert_eq!(
            FieldValue::from_json(&json!("Delft")),
            FieldValue::Scalar("Delft".to_string())
        );
        assert_eq!(
            FieldValue::from_json(&json!({"def": "Delft"})),
            FieldValue::Wrapped("Delft".to_string())
        );
        assert_eq!(FieldValue::from_json(&json!(null)), FieldValue::Absent);
        assert_eq!(FieldValue::from_json(&json!({"en": "x"})), FieldValue::Absent);
        assert_eq!(
            FieldValue::from_json(&json!(1700)),
            FieldValue::Scalar("1700".to_string())
        );
    }

    #[test]
    fn test_flatten_nested_lists_and_wrappers() {
        let value = json!(["China", [{"def": "Jingdezhen"}, null], "", {"def": ["Delft", "Holland"]}]);
        assert_eq!(
            FieldValue::from_json(&value).flatten(),
            vec!["China", "Jingdezhen", "Delft", "Holland"]
        );
    }

    #[test]
    fn test_stringified_wrapper_is_unwrapped() {
        let value = json!("{'def': 'Bruxelles'}");
        assert_eq!(
            FieldValue::from_json(&value),
            FieldValue::Wrapped("Bruxelles".to_string())
        );
    }

    #[test]
    fn test_broken_stringified_wrapper_stays_scalar() {
        let value = json!("{def: broken");
        assert_eq!(
            FieldValue::from_json(&value),
            FieldValue::Scalar("{def: broken".to_string())
        );
    }

    #[test]
    fn test_is_absent() {
        assert!(FieldValue::Absent.is_absent());
        assert!(FieldValue::List(vec![FieldValue::Absent]).is_absent());
        assert!(!FieldValue::Scalar(String::new()).is_absent());
    }

    #[test]
    fn test_raw_item_rejects_non_object() {
        let err = RawItem::from_value(json!(["not", "a", "record"])).unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_nested_field() {
        let item = RawItem::from_value(json!({
            "Metadata_for_Management": {"Period": [{"def": "18th century"}]}
        }))
        .unwrap();
        assert_eq!(
            item.nested(&["Metadata_for_Management", "Period"]).flatten(),
            vec!["18th century"]
        );
        assert!(item.nested(&["Metadata_for_Management", "Missing"]).is_absent());
        assert!(item.nested(&[]).is_absent());
    }

    #[test]
    fn test_id_defaults_to_empty() {
        let item = RawItem::from_value(json!({})).unwrap();
        assert_eq!(item.id(), "");
        let item = RawItem::from_value(json!({"id": "/2048/obj_1"})).unwrap();
        assert_eq!(item.id(), "/2048/obj_1");
    }

    #[test]
    fn test_assemble_text_order_and_limit() {
        let item = RawItem::from_value(json!({
            "title": "Vase",
            "dcDescription": ["Blue and white", "  "],
            "conceptLabel": [{"def": "porcelain"}]
        }))
        .unwrap();
        assert_eq!(item.assemble_text(), "Blue and white Vase porcelain");
        assert_eq!(item.assemble_text_with_limit(4), "Blue");
    }

    #[test]
    fn test_assemble_text_truncates_on_char_boundary() {
        let item = RawItem::from_value(json!({"title": "faïence"})).unwrap();
        assert_eq!(item.assemble_text_with_limit(3), "faï");
    }
}
