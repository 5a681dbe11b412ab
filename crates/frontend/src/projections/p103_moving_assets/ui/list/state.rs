use contracts::shared::filters::{FilterCategory, SortSpec};

use crate::shared::filter_state::{FieldKind, FieldSchema, ViewKind, ViewSchema};
use crate::shared::option_resolver::source::{ASSET_OPTIONS, COUNTRY_OPTIONS};
use crate::shared::option_resolver::OptionSource;

const SCHEMA_VERSION: u32 = 1;

pub fn schema() -> ViewSchema {
    ViewSchema::new(ViewKind::MovingAssets)
        .version(SCHEMA_VERSION)
        .sort(SortSpec::desc("speed_kph"))
        .field(FieldSchema::new(
            FilterCategory::Asset,
            "asset_ids",
            "Assets",
            FieldKind::multi_select(OptionSource::remote(ASSET_OPTIONS)),
        ))
        .field(FieldSchema::new(
            FilterCategory::Location,
            "country_ids",
            "Countries",
            FieldKind::multi_select(OptionSource::remote(COUNTRY_OPTIONS)),
        ))
        .field(FieldSchema::new(
            FilterCategory::Operational,
            "min_speed_kph",
            "Speed at least (km/h)",
            FieldKind::Number,
        ))
        .field(FieldSchema::new(
            FilterCategory::Sensor,
            "loaded",
            "Loaded",
            FieldKind::Toggle,
        ))
        .field(FieldSchema::new(
            FilterCategory::Operational,
            "moving_since",
            "Moving since",
            FieldKind::DateRange,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::persistence::MemoryStorage;
    use crate::shared::filter_state::FilterStore;
    use contracts::shared::filters::{DateRange, FilterValue};
    use std::sync::Arc;

    #[test]
    fn test_empty_date_range_is_not_active() {
        let mut store =
            FilterStore::open(Arc::new(schema()), "u1", Arc::new(MemoryStorage::new()), 5);
        store.set_filter(
            FilterCategory::Operational,
            "moving_since",
            FilterValue::DateRange(DateRange::default()),
        );
        assert_eq!(store.active_filter_count(), 0);
        assert!(store.is_default());

        store.set_filter(FilterCategory::Operational, "min_speed_kph", FilterValue::Number(0.0));
        assert_eq!(store.active_filter_count(), 1);
    }

    #[test]
    fn test_categories_in_canonical_order() {
        assert_eq!(
            schema().categories(),
            vec![FilterCategory::Asset, FilterCategory::Location, FilterCategory::Sensor, FilterCategory::Operational]
        );
    }
}
