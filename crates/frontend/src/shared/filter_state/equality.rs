//! Equality of filter values where every flavour of "nothing" is the same.
//!
//! `Null`, an absent field, `""`, `[]`, `{}` and an open date range compare
//! equal to each other at any depth. Objects are compared key by key over
//! the union of their keys. Arrays are compared by length and then element
//! by element with plain `==`; elements themselves are not normalized.

use contracts::shared::filters::{FilterSet, FilterValue};
use std::collections::{BTreeMap, BTreeSet};

const NULL: FilterValue = FilterValue::Null;

/// True when the value carries no filtering at any depth
pub fn is_blank(value: &FilterValue) -> bool {
    match value {
        FilterValue::Object(map) => map.values().all(is_blank),
        other => other.is_empty(),
    }
}

pub fn is_values_equal(a: &FilterValue, b: &FilterValue) -> bool {
    if is_blank(a) && is_blank(b) {
        return true;
    }

    match (a, b) {
        (FilterValue::Object(x), FilterValue::Object(y)) => is_objects_equal(x, y),
        (FilterValue::Ids(x), FilterValue::Ids(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| p == q)
        }
        (FilterValue::List(x), FilterValue::List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| p == q)
        }
        // NaN never lands in a filter from the UI, but keep equality reflexive
        (FilterValue::Number(x), FilterValue::Number(y)) => {
            x == y || (x.is_nan() && y.is_nan())
        }
        _ => a == b,
    }
}

fn is_objects_equal(a: &BTreeMap<String, FilterValue>, b: &BTreeMap<String, FilterValue>) -> bool {
    let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
    keys.into_iter().all(|key| {
        is_values_equal(a.get(key).unwrap_or(&NULL), b.get(key).unwrap_or(&NULL))
    })
}

/// Compare two filter sets leaf by leaf
pub fn is_filters_equal(a: &FilterSet, b: &FilterSet) -> bool {
    let categories: BTreeSet<_> = a.categories().chain(b.categories()).collect();
    categories.into_iter().all(|category| {
        let empty = BTreeMap::new();
        let x = a.category(category).unwrap_or(&empty);
        let y = b.category(category).unwrap_or(&empty);
        is_objects_equal(x, y)
    })
}

/// Number of leaves that actually filter
pub fn active_filter_count(filters: &FilterSet) -> usize {
    filters.leaves().filter(|(_, value)| !is_blank(value)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filters::{DateRange, FilterCategory, TaggedId};

    fn empties() -> Vec<FilterValue> {
        vec![
            FilterValue::Null,
            FilterValue::Text(String::new()),
            FilterValue::Ids(vec![]),
            FilterValue::List(vec![]),
            FilterValue::Object(BTreeMap::new()),
            FilterValue::DateRange(DateRange::default()),
        ]
    }

    fn obj(pairs: Vec<(&str, FilterValue)>) -> FilterValue {
        FilterValue::Object(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn test_empty_values_are_mutually_equal() {
        for a in empties() {
            for b in empties() {
                assert!(is_values_equal(&a, &b), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_empty_equivalence_at_depth() {
        let a = obj(vec![("x", obj(vec![("y", FilterValue::Null)]))]);
        let b = obj(vec![("x", FilterValue::Text(String::new()))]);
        let c = FilterValue::Object(BTreeMap::new());
        assert!(is_values_equal(&a, &b));
        assert!(is_values_equal(&a, &c));
        assert!(is_values_equal(&a, &FilterValue::Null));
    }

    #[test]
    fn test_reflexive_and_symmetric() {
        let values = vec![
            FilterValue::Number(0.0),
            FilterValue::Number(f64::NAN),
            FilterValue::Bool(false),
            FilterValue::Text("reefer".into()),
            FilterValue::Ids(vec![TaggedId::new("1", "TR-1")]),
            obj(vec![("min", FilterValue::Number(2.0))]),
        ];
        for a in &values {
            assert!(is_values_equal(a, a), "{:?}", a);
            for b in &values {
                assert_eq!(is_values_equal(a, b), is_values_equal(b, a));
            }
        }
    }

    #[test]
    fn test_zero_and_false_are_not_empty() {
        assert!(!is_values_equal(&FilterValue::Number(0.0), &FilterValue::Null));
        assert!(!is_values_equal(&FilterValue::Bool(false), &FilterValue::Null));
    }

    #[test]
    fn test_arrays_compare_by_length_and_elements() {
        let a = FilterValue::Ids(vec![TaggedId::new("1", "TR-1"), TaggedId::new("2", "TR-2")]);
        let b = FilterValue::Ids(vec![TaggedId::new("2", "TR-2"), TaggedId::new("1", "TR-1")]);
        let c = FilterValue::Ids(vec![TaggedId::new("1", "TR-1")]);
        assert!(!is_values_equal(&a, &b));
        assert!(!is_values_equal(&a, &c));
        assert!(is_values_equal(&a, &a.clone()));
    }

    #[test]
    fn test_array_elements_not_normalized() {
        let a = FilterValue::List(vec![FilterValue::Null]);
        let b = FilterValue::List(vec![FilterValue::Text(String::new())]);
        assert!(!is_values_equal(&a, &b));
    }

    #[test]
    fn test_filter_sets_with_missing_categories() {
        let a = FilterSet::new()
            .with(FilterCategory::Asset, "asset_ids", FilterValue::Ids(vec![]))
            .with(FilterCategory::Sensor, "door_open", FilterValue::Null);
        let b = FilterSet::new();
        assert!(is_filters_equal(&a, &b));
        assert!(is_filters_equal(&b, &a));

        let c = b.clone().with(FilterCategory::Sensor, "door_open", FilterValue::Bool(true));
        assert!(!is_filters_equal(&a, &c));
        assert_eq!(active_filter_count(&c), 1);
    }
}
