use contracts::projections::p104_accrued_distance::dto::DistanceUnit;
use contracts::shared::filters::{FilterCategory, FilterValue, SortSpec, TaggedId};

use crate::shared::filter_state::{FieldKind, FieldSchema, ViewKind, ViewSchema};
use crate::shared::option_resolver::source::ASSET_OPTIONS;
use crate::shared::option_resolver::OptionSource;

const SCHEMA_VERSION: u32 = 1;

/// Distance comparisons get unreadable past this many assets
pub const MAX_COMPARED_ASSETS: usize = 10;

fn unit_options() -> Vec<TaggedId> {
    [DistanceUnit::Km, DistanceUnit::Mi]
        .iter()
        .map(|u| TaggedId::new(u.code(), u.code()))
        .collect()
}

pub fn schema() -> ViewSchema {
    ViewSchema::new(ViewKind::AccruedDistance)
        .version(SCHEMA_VERSION)
        .sort(SortSpec::desc("distance_km"))
        .field(FieldSchema::new(
            FilterCategory::Asset,
            "asset_ids",
            "Assets",
            FieldKind::MultiSelect {
                source: OptionSource::remote(ASSET_OPTIONS),
                max_selected: Some(MAX_COMPARED_ASSETS),
                permanent_ids: Vec::new(),
            },
        ))
        .field(FieldSchema::new(
            FilterCategory::Operational,
            "period",
            "Period",
            FieldKind::DateRange,
        ))
        .field(FieldSchema::new(
            FilterCategory::Operational,
            "min_distance",
            "Distance at least",
            FieldKind::Number,
        ))
        .field(
            FieldSchema::new(
                FilterCategory::Display,
                "unit",
                "Unit",
                FieldKind::Select {
                    options: unit_options(),
                },
            )
            .with_default(FilterValue::Text(DistanceUnit::Km.code().to_string())),
        )
}

/// Unit chosen in the display filter
pub fn selected_unit(value: &FilterValue) -> DistanceUnit {
    value
        .as_text()
        .map(DistanceUnit::from_code)
        .unwrap_or(DistanceUnit::Km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::persistence::MemoryStorage;
    use crate::shared::filter_state::FilterStore;
    use std::sync::Arc;

    #[test]
    fn test_unit_defaults_to_km() {
        let mut store =
            FilterStore::open(Arc::new(schema()), "u1", Arc::new(MemoryStorage::new()), 5);
        assert_eq!(selected_unit(store.filter(FilterCategory::Display, "unit")), DistanceUnit::Km);

        store.set_filter(FilterCategory::Display, "unit", FilterValue::Text("mi".into()));
        assert_eq!(selected_unit(store.filter(FilterCategory::Display, "unit")), DistanceUnit::Mi);

        store.empty_view_filters();
        assert_eq!(store.filter(FilterCategory::Display, "unit"), &FilterValue::Null);
        assert_eq!(selected_unit(store.filter(FilterCategory::Display, "unit")), DistanceUnit::Km);
    }

    #[test]
    fn test_asset_limit_declared() {
        let schema = schema();
        match schema.find(FilterCategory::Asset, "asset_ids").map(|f| &f.kind) {
            Some(FieldKind::MultiSelect { max_selected, .. }) => {
                assert_eq!(*max_selected, Some(MAX_COMPARED_ASSETS))
            }
            other => panic!("unexpected field kind {:?}", other),
        }
    }
}
