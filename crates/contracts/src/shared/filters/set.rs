use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::value::FilterValue;

/// Top-level filter categories shared by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    Asset,
    Location,
    Sensor,
    Operational,
    Display,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 5] = [
        FilterCategory::Asset,
        FilterCategory::Location,
        FilterCategory::Sensor,
        FilterCategory::Operational,
        FilterCategory::Display,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::Asset => "asset",
            FilterCategory::Location => "location",
            FilterCategory::Sensor => "sensor",
            FilterCategory::Operational => "operational",
            FilterCategory::Display => "display",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FilterCategory::Asset => "Asset",
            FilterCategory::Location => "Location",
            FilterCategory::Sensor => "Sensor",
            FilterCategory::Operational => "Operational",
            FilterCategory::Display => "Display",
        }
    }
}

impl FromStr for FilterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown filter category: {}", s))
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `category.field` address of a filter leaf
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
    pub category: FilterCategory,
    pub field: String,
}

impl FieldPath {
    pub fn new(category: FilterCategory, field: impl Into<String>) -> Self {
        Self {
            category,
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.field)
    }
}

impl FromStr for FieldPath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, field) = s
            .split_once('.')
            .ok_or_else(|| format!("Invalid field path: {}", s))?;
        if field.is_empty() {
            return Err(format!("Invalid field path: {}", s));
        }
        Ok(FieldPath::new(category.parse()?, field))
    }
}

/// Nested filter values: category -> field -> value.
/// Absent categories and fields mean "not filtering".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(BTreeMap<FilterCategory, BTreeMap<String, FilterValue>>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: FilterCategory, field: &str) -> Option<&FilterValue> {
        self.0.get(&category).and_then(|fields| fields.get(field))
    }

    pub fn set(&mut self, category: FilterCategory, field: impl Into<String>, value: FilterValue) {
        self.0.entry(category).or_default().insert(field.into(), value);
    }

    pub fn with(mut self, category: FilterCategory, field: &str, value: FilterValue) -> Self {
        self.set(category, field, value);
        self
    }

    pub fn category(&self, category: FilterCategory) -> Option<&BTreeMap<String, FilterValue>> {
        self.0.get(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = FilterCategory> + '_ {
        self.0.keys().copied()
    }

    /// All leaves in category/field order
    pub fn leaves(&self) -> impl Iterator<Item = (FieldPath, &FilterValue)> + '_ {
        self.0.iter().flat_map(|(category, fields)| {
            fields
                .iter()
                .map(move |(field, value)| (FieldPath::new(*category, field.clone()), value))
        })
    }

    /// Leaves holding a non-empty value
    pub fn active_leaves(&self) -> impl Iterator<Item = (FieldPath, &FilterValue)> + '_ {
        self.leaves().filter(|(_, value)| !value.is_empty())
    }

    /// Copy without empty leaves, used for query payloads
    pub fn compacted(&self) -> FilterSet {
        let mut out = FilterSet::new();
        for (path, value) in self.active_leaves() {
            out.set(path.category, path.field, value.clone());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::value::TaggedId;

    #[test]
    fn test_field_path_roundtrip_text() {
        let path = FieldPath::new(FilterCategory::Location, "landmark_ids");
        assert_eq!(path.to_string(), "location.landmark_ids");
        assert_eq!("location.landmark_ids".parse::<FieldPath>().unwrap(), path);
        assert!("location".parse::<FieldPath>().is_err());
        assert!("planet.x".parse::<FieldPath>().is_err());
    }

    #[test]
    fn test_compacted_drops_empty_leaves() {
        let set = FilterSet::new()
            .with(FilterCategory::Asset, "asset_ids", FilterValue::Ids(vec![]))
            .with(
                FilterCategory::Location,
                "country_ids",
                FilterValue::Ids(vec![TaggedId::new("de", "Germany")]),
            );
        let compact = set.compacted();
        assert!(compact.get(FilterCategory::Asset, "asset_ids").is_none());
        assert!(compact.get(FilterCategory::Location, "country_ids").is_some());
    }

    #[test]
    fn test_serialized_as_nested_object() {
        let set = FilterSet::new().with(FilterCategory::Sensor, "door_open", FilterValue::Bool(true));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["sensor"]["door_open"]["value"], true);
    }
}
