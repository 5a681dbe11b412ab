use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier with a display label, as returned by option endpoints
/// and stored in multi-select filters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedId {
    pub id: String,
    pub label: String,
}

impl TaggedId {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Inclusive date range, either bound may be open
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Human-readable period, e.g. "2024-03-01 — 2024-03-31"
    pub fn display(&self) -> String {
        match (self.from, self.to) {
            (Some(f), Some(t)) => format!("{} — {}", f, t),
            (Some(f), None) => format!("≥ {}", f),
            (None, Some(t)) => format!("≤ {}", t),
            (None, None) => String::new(),
        }
    }
}

/// Value of a single filter leaf
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    /// Not filtering
    #[default]
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Multi-select of tagged ids
    Ids(Vec<TaggedId>),
    List(Vec<FilterValue>),
    DateRange(DateRange),
    Object(BTreeMap<String, FilterValue>),
}

impl FilterValue {
    /// `Null`, `""`, `[]`, `{}` and an open date range are all "empty".
    /// Zero and `false` are real values.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Null => true,
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Number(_) | FilterValue::Bool(_) => false,
            FilterValue::Ids(ids) => ids.is_empty(),
            FilterValue::List(items) => items.is_empty(),
            FilterValue::DateRange(range) => range.is_empty(),
            FilterValue::Object(map) => map.is_empty(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            FilterValue::Null => "null",
            FilterValue::Text(_) => "text",
            FilterValue::Number(_) => "number",
            FilterValue::Bool(_) => "bool",
            FilterValue::Ids(_) => "ids",
            FilterValue::List(_) => "list",
            FilterValue::DateRange(_) => "date_range",
            FilterValue::Object(_) => "object",
        }
    }

    pub fn as_ids(&self) -> &[TaggedId] {
        match self {
            FilterValue::Ids(ids) => ids,
            _ => &[],
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date_range(&self) -> Option<&DateRange> {
        match self {
            FilterValue::DateRange(r) => Some(r),
            _ => None,
        }
    }

    /// Short text for filter chips
    pub fn display(&self) -> String {
        match self {
            FilterValue::Null => String::new(),
            FilterValue::Text(s) => s.clone(),
            FilterValue::Number(n) => format!("{}", n),
            FilterValue::Bool(true) => "Yes".to_string(),
            FilterValue::Bool(false) => "No".to_string(),
            FilterValue::Ids(ids) => match ids.len() {
                0 => String::new(),
                1 => ids[0].label.clone(),
                n => format!("{} +{}", ids[0].label, n - 1),
            },
            FilterValue::List(items) => items
                .iter()
                .map(FilterValue::display)
                .collect::<Vec<_>>()
                .join(", "),
            FilterValue::DateRange(r) => r.display(),
            FilterValue::Object(map) => format!("{} fields", map.len()),
        }
    }
}

impl From<Vec<TaggedId>> for FilterValue {
    fn from(ids: Vec<TaggedId>) -> Self {
        FilterValue::Ids(ids)
    }
}

impl From<DateRange> for FilterValue {
    fn from(range: DateRange) -> Self {
        FilterValue::DateRange(range)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(FilterValue::Null.is_empty());
        assert!(FilterValue::Text(String::new()).is_empty());
        assert!(FilterValue::Ids(vec![]).is_empty());
        assert!(FilterValue::Object(BTreeMap::new()).is_empty());
        assert!(FilterValue::DateRange(DateRange::default()).is_empty());
        assert!(!FilterValue::Number(0.0).is_empty());
        assert!(!FilterValue::Bool(false).is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let v = FilterValue::Ids(vec![TaggedId::new("42", "TR-42")]);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["kind"], "ids");
        assert_eq!(json["value"][0]["id"], "42");

        let null = serde_json::to_string(&FilterValue::Null).unwrap();
        assert_eq!(null, r#"{"kind":"null"}"#);
    }

    #[test]
    fn test_display_ids() {
        let v = FilterValue::Ids(vec![
            TaggedId::new("1", "TR-1"),
            TaggedId::new("2", "TR-2"),
            TaggedId::new("3", "TR-3"),
        ]);
        assert_eq!(v.display(), "TR-1 +2");
    }
}
