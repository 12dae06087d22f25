//! The persisted assignment option and normalization of its values.

use crate::{StoreError, StoreResult};
use pagefor_types::PageId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Normalizes a stored assignment value to a page id.
///
/// Settings forms write ids as numbers or numeric strings, and "none" as
/// `"0"`, `""`, `0`, `null` or `false`. Anything that is not a positive
/// integer means unassigned.
#[must_use]
pub fn normalize_page_id(value: &Value) -> Option<PageId> {
    match value {
        Value::Number(n) => n.as_u64().and_then(PageId::new),
        Value::String(s) => s.trim().parse::<u64>().ok().and_then(PageId::new),
        _ => None,
    }
}

/// The stored option as written by the settings collaborator: a JSON object
/// keyed by content type name.
///
/// Raw values are kept as written and normalized on read, so an option that
/// round-trips through this type keeps every value the host stored.
/// Key order is the order in the document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentOption(Map<String, Value>);

impl AssignmentOption {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the option from its JSON form. `null` is an empty option.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(StoreError::InvalidData(format!(
                "expected a JSON object, found {other}"
            ))),
        }
    }

    /// Reads the option from a JSON file.
    pub fn load_from(path: &Path) -> StoreResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Writes the option to a JSON file.
    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.0)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Normalized page for a content type.
    #[must_use]
    pub fn get(&self, content_type: &str) -> Option<PageId> {
        self.0.get(content_type).and_then(normalize_page_id)
    }

    /// Raw stored value for a content type.
    #[must_use]
    pub fn raw(&self, content_type: &str) -> Option<&Value> {
        self.0.get(content_type)
    }

    /// Assigns a page, or removes the entry for `None`.
    pub fn set(&mut self, content_type: impl Into<String>, page: Option<PageId>) {
        let content_type = content_type.into();
        match page {
            Some(id) => {
                self.0.insert(content_type, Value::from(id.get()));
            }
            None => {
                self.0.shift_remove(&content_type);
            }
        }
    }

    /// Stores a raw value as a settings form would.
    pub fn set_raw(&mut self, content_type: impl Into<String>, value: Value) {
        self.0.insert(content_type.into(), value);
    }

    /// Assigned entries in document order. Unassigned values are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PageId)> {
        self.0
            .iter()
            .filter_map(|(name, value)| normalize_page_id(value).map(|id| (name.as_str(), id)))
    }

    /// Whether two options assign the same pages in the same order, ignoring
    /// how "none" and the ids are spelled.
    #[must_use]
    pub fn same_assignments(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<S: Into<String>> FromIterator<(S, PageId)> for AssignmentOption {
    fn from_iter<I: IntoIterator<Item = (S, PageId)>>(iter: I) -> Self {
        let mut option = Self::new();
        for (name, id) in iter {
            option.set(name, Some(id));
        }
        option
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_accepts_numbers_and_numeric_strings() {
        assert_eq!(normalize_page_id(&json!(42)), PageId::new(42));
        assert_eq!(normalize_page_id(&json!("42")), PageId::new(42));
        assert_eq!(normalize_page_id(&json!(" 7 ")), PageId::new(7));
    }

    #[test]
    fn normalize_treats_none_markers_as_unassigned() {
        for value in [json!(0), json!("0"), json!(""), json!(null), json!(false), json!(-3)] {
            assert_eq!(normalize_page_id(&value), None, "value {value}");
        }
    }

    #[test]
    fn normalize_rejects_non_integers() {
        assert_eq!(normalize_page_id(&json!("abc")), None);
        assert_eq!(normalize_page_id(&json!(4.5)), None);
        assert_eq!(normalize_page_id(&json!([42])), None);
    }
}
