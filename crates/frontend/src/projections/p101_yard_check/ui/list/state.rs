use contracts::domain::a101_asset::dto::AssetType;
use contracts::shared::filters::{FilterCategory, SortSpec};

use crate::shared::filter_state::{FieldKind, FieldSchema, ViewKind, ViewSchema};
use crate::shared::option_resolver::source::{ASSET_OPTIONS, COUNTRY_OPTIONS, LANDMARK_OPTIONS};
use crate::shared::option_resolver::OptionSource;

const SCHEMA_VERSION: u32 = 1;

/// Yard checks are audited page by page, so filtering keeps the page
pub fn schema() -> ViewSchema {
    ViewSchema::new(ViewKind::YardCheck)
        .version(SCHEMA_VERSION)
        .reset_page_on_filter_change(false)
        .sort(SortSpec::asc("asset_name"))
        .field(FieldSchema::new(
            FilterCategory::Asset,
            "asset_ids",
            "Assets",
            FieldKind::multi_select(OptionSource::remote(ASSET_OPTIONS)),
        ))
        .field(FieldSchema::new(
            FilterCategory::Asset,
            "asset_type",
            "Asset type",
            FieldKind::Select {
                options: AssetType::options(),
            },
        ))
        .field(FieldSchema::new(
            FilterCategory::Location,
            "landmark_ids",
            "Landmarks",
            FieldKind::multi_select(OptionSource::remote(LANDMARK_OPTIONS)),
        ))
        .field(FieldSchema::new(
            FilterCategory::Location,
            "country_ids",
            "Countries",
            FieldKind::multi_select(OptionSource::remote(COUNTRY_OPTIONS)),
        ))
        .field(FieldSchema::new(
            FilterCategory::Operational,
            "last_checked",
            "Last check",
            FieldKind::DateRange,
        ))
        .pinned(FilterCategory::Asset, "asset_ids")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::persistence::MemoryStorage;
    use crate::shared::filter_state::FilterStore;
    use contracts::shared::filters::{FilterValue, TaggedId};
    use std::sync::Arc;

    fn open() -> FilterStore {
        FilterStore::open(Arc::new(schema()), "u1", Arc::new(MemoryStorage::new()), 5)
    }

    #[test]
    fn test_filtering_keeps_page() {
        let mut store = open();
        store.set_page(4);
        store.set_filter(
            FilterCategory::Asset,
            "asset_ids",
            FilterValue::Ids(vec![TaggedId::new("1", "Trailer 1")]),
        );
        assert_eq!(store.pagination().page, 4);
    }

    #[test]
    fn test_asset_ids_pinned_by_default() {
        let store = open();
        assert!(store.is_filter_pinned(FilterCategory::Asset, "asset_ids"));
        assert!(!store.is_filter_pinned(FilterCategory::Location, "landmark_ids"));
        assert!(store.is_default());
    }

    #[test]
    fn test_asset_type_takes_codes() {
        let mut store = open();
        assert!(store.set_filter(FilterCategory::Asset, "asset_type", FilterValue::Text("reefer".into())));
        assert!(!store.set_filter(FilterCategory::Asset, "asset_type", FilterValue::Bool(true)));
        assert_eq!(store.active_filter_count(), 1);
    }
}
