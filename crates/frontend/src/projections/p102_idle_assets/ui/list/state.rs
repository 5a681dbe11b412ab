use contracts::shared::filters::{FilterCategory, FilterValue, SortSpec};

use crate::shared::filter_state::{FieldKind, FieldSchema, ViewKind, ViewSchema};
use crate::shared::option_resolver::source::{ASSET_OPTIONS, LANDMARK_OPTIONS};
use crate::shared::option_resolver::OptionSource;

const SCHEMA_VERSION: u32 = 1;

/// Assets idle for less than this many days are not listed by default
pub const DEFAULT_MIN_IDLE_DAYS: f64 = 2.0;

pub fn schema() -> ViewSchema {
    ViewSchema::new(ViewKind::IdleAssets)
        .version(SCHEMA_VERSION)
        .sort(SortSpec::desc("idle_days"))
        .field(FieldSchema::new(
            FilterCategory::Asset,
            "asset_ids",
            "Assets",
            FieldKind::multi_select(OptionSource::remote(ASSET_OPTIONS)),
        ))
        .field(FieldSchema::new(
            FilterCategory::Location,
            "landmark_ids",
            "Landmarks",
            FieldKind::multi_select(OptionSource::remote(LANDMARK_OPTIONS)),
        ))
        .field(
            FieldSchema::new(
                FilterCategory::Operational,
                "min_idle_days",
                "Idle for at least (days)",
                FieldKind::Number,
            )
            .with_default(FilterValue::Number(DEFAULT_MIN_IDLE_DAYS)),
        )
        .field(FieldSchema::new(
            FilterCategory::Sensor,
            "battery_low",
            "Battery low",
            FieldKind::Toggle,
        ))
        .field(FieldSchema::new(
            FilterCategory::Sensor,
            "door_open",
            "Door open",
            FieldKind::Toggle,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::persistence::MemoryStorage;
    use crate::shared::filter_state::FilterStore;
    use contracts::shared::filters::TaggedId;
    use std::sync::Arc;

    fn open() -> FilterStore {
        FilterStore::open(Arc::new(schema()), "u1", Arc::new(MemoryStorage::new()), 5)
    }

    #[test]
    fn test_clear_all_keeps_min_idle_default() {
        let mut store = open();
        let ids = ["1", "2", "3"]
            .iter()
            .map(|id| TaggedId::new(*id, format!("Trailer {}", id)))
            .collect::<Vec<_>>();
        store.set_filter(FilterCategory::Asset, "asset_ids", FilterValue::Ids(ids));
        store.set_filter(FilterCategory::Sensor, "door_open", FilterValue::Bool(true));
        assert_eq!(store.active_filter_count(), 3);

        store.reset_view_filters(false);
        assert_eq!(store.active_filter_count(), 1);
        assert_eq!(
            store.filter(FilterCategory::Operational, "min_idle_days"),
            &FilterValue::Number(DEFAULT_MIN_IDLE_DAYS)
        );
    }

    #[test]
    fn test_filtering_resets_page() {
        let mut store = open();
        store.set_page(3);
        store.set_filter(FilterCategory::Sensor, "battery_low", FilterValue::Bool(true));
        assert_eq!(store.pagination().page, 0);
    }

    #[test]
    fn test_list_request_sorted_by_idle_days() {
        let store = open();
        let request = store.list_request();
        assert_eq!(request.sort, Some(SortSpec::desc("idle_days")));
        assert_eq!(
            request.filters.get(FilterCategory::Operational, "min_idle_days"),
            Some(&FilterValue::Number(2.0))
        );
    }
}
