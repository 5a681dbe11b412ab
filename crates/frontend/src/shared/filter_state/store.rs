use contracts::shared::filters::{
    FieldPath, FilterCategory, FilterSet, FilterValue, ListRequest, SortDirection, SortSpec, TaggedId,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::equality::{active_filter_count, is_filters_equal};
use super::persistence::{load_state, save_state, storage_key, KeyValueStorage};
use super::schema::{ViewKind, ViewSchema};

pub const DEFAULT_RECENT_CAP: usize = 5;

static NULL: FilterValue = FilterValue::Null;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 50,
            sort: None,
        }
    }
}

/// Most-recently-used selections of one field, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentValues(Vec<TaggedId>);

impl RecentValues {
    /// Adds entries that are not remembered yet and evicts the oldest beyond `cap`.
    /// `values` is expected oldest first, so its last entry ends up first.
    pub fn remember(&mut self, values: &[TaggedId], cap: usize) {
        for value in values {
            if self.0.iter().any(|v| v.id == value.id) {
                continue;
            }
            self.0.insert(0, value.clone());
        }
        self.0.truncate(cap);
    }

    pub fn as_slice(&self) -> &[TaggedId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything a view persists between reloads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewFilterState {
    pub filters: FilterSet,
    /// Keyed by `category.field`
    #[serde(default)]
    pub recent: BTreeMap<String, RecentValues>,
    #[serde(default)]
    pub pinned: BTreeSet<String>,
    pub pagination: Pagination,
    #[serde(default)]
    pub filter_bar_visible: bool,
}

impl ViewFilterState {
    pub fn initial(schema: &ViewSchema) -> Self {
        Self {
            filters: schema.default_filters(),
            recent: BTreeMap::new(),
            pinned: schema.default_pinned.iter().map(|p| p.to_string()).collect(),
            pagination: Pagination {
                page: 0,
                page_size: schema.default_page_size,
                sort: schema.default_sort.clone(),
            },
            filter_bar_visible: schema.filter_bar_visible,
        }
    }

    /// Fit a persisted document to the current schema: unknown fields and
    /// pins are dropped, missing fields get their defaults
    fn conform(mut self, schema: &ViewSchema) -> Self {
        let mut filters = FilterSet::new();
        for field in &schema.fields {
            let value = match self.filters.get(field.category, field.name) {
                Some(v) if field.kind.accepts(v) => v.clone(),
                Some(v) => {
                    log::warn!(
                        "{}: persisted {} has wrong shape ({}), using default",
                        schema.kind.name(),
                        field.path(),
                        v.kind_name()
                    );
                    field.default.clone()
                }
                None => field.default.clone(),
            };
            filters.set(field.category, field.name, value);
        }
        self.filters = filters;

        let known: BTreeSet<String> = schema.fields.iter().map(|f| f.path().to_string()).collect();
        self.pinned.retain(|p| known.contains(p));
        self.recent.retain(|p, _| known.contains(p));
        if self.pagination.page_size == 0 {
            self.pagination.page_size = schema.default_page_size;
        }
        self
    }
}

/// Filter, pin, recent-value and paging state of one view.
///
/// All operations are total: values that do not fit the schema are ignored
/// with a warning, storage failures are logged and never returned.
pub struct FilterStore {
    schema: Arc<ViewSchema>,
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    recent_cap: usize,
    state: ViewFilterState,
}

impl std::fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStore")
            .field("view", &self.schema.kind)
            .field("key", &self.key)
            .field("state", &self.state)
            .finish()
    }
}

impl FilterStore {
    /// Restore the view state for `user_id`, or start from schema defaults
    pub fn open(
        schema: Arc<ViewSchema>,
        user_id: &str,
        storage: Arc<dyn KeyValueStorage>,
        recent_cap: usize,
    ) -> Self {
        let key = storage_key(user_id, schema.kind);
        let state = match load_state(storage.as_ref(), &key, schema.version) {
            Some(persisted) => {
                log::debug!("Restored filter state {}", key);
                persisted.conform(&schema)
            }
            None => ViewFilterState::initial(&schema),
        };
        Self {
            schema,
            storage,
            key,
            recent_cap,
            state,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.schema.kind
    }

    pub fn schema(&self) -> &ViewSchema {
        &self.schema
    }

    pub fn state(&self) -> &ViewFilterState {
        &self.state
    }

    pub fn filters(&self) -> &FilterSet {
        &self.state.filters
    }

    pub fn filter(&self, category: FilterCategory, field: &str) -> &FilterValue {
        self.state.filters.get(category, field).unwrap_or(&NULL)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.state.pagination
    }

    /// Replace one leaf. Returns false when the value was rejected.
    pub fn set_filter(&mut self, category: FilterCategory, field: &str, value: FilterValue) -> bool {
        if !self.put_filter(category, field, value) {
            return false;
        }
        if self.schema.reset_page_on_filter_change {
            self.state.pagination.page = 0;
        }
        self.persist();
        true
    }

    fn put_filter(&mut self, category: FilterCategory, field: &str, value: FilterValue) -> bool {
        let Some(schema) = self.schema.find(category, field) else {
            log::warn!("{}: unknown filter {}.{}", self.schema.kind.name(), category, field);
            return false;
        };
        if !schema.kind.accepts(&value) {
            log::warn!(
                "{}: {} does not accept {} value",
                self.schema.kind.name(),
                schema.path(),
                value.kind_name()
            );
            return false;
        }
        log::debug!("{}: set {}", self.schema.kind.name(), schema.path());
        self.state.filters.set(category, field, value);
        true
    }

    pub fn recent_filter(&self, category: FilterCategory, field: &str) -> &[TaggedId] {
        self.state
            .recent
            .get(&FieldPath::new(category, field).to_string())
            .map(RecentValues::as_slice)
            .unwrap_or(&[])
    }

    pub fn set_recent_filter(&mut self, category: FilterCategory, field: &str, values: &[TaggedId]) {
        if self.schema.find(category, field).is_none() || values.is_empty() {
            return;
        }
        let cap = self.recent_cap;
        self.state
            .recent
            .entry(FieldPath::new(category, field).to_string())
            .or_default()
            .remember(values, cap);
        self.persist();
    }

    pub fn set_pinned_filter(&mut self, category: FilterCategory, field: &str, pinned: bool) {
        if self.schema.find(category, field).is_none() {
            log::warn!("{}: cannot pin unknown filter {}.{}", self.schema.kind.name(), category, field);
            return;
        }
        let path = FieldPath::new(category, field).to_string();
        let changed = if pinned {
            self.state.pinned.insert(path)
        } else {
            self.state.pinned.remove(&path)
        };
        if changed {
            self.persist();
        }
    }

    pub fn is_filter_pinned(&self, category: FilterCategory, field: &str) -> bool {
        self.state
            .pinned
            .contains(&FieldPath::new(category, field).to_string())
    }

    /// Pinned fields in schema order
    pub fn pinned_fields(&self) -> Vec<FieldPath> {
        self.schema
            .fields
            .iter()
            .filter(|f| self.is_filter_pinned(f.category, f.name))
            .map(|f| f.path())
            .collect()
    }

    /// Back to the view defaults. `include_base` also restores paging,
    /// sort, pins and the filter bar.
    pub fn reset_view_filters(&mut self, include_base: bool) {
        self.state.filters = self.schema.default_filters();
        if include_base {
            let initial = ViewFilterState::initial(&self.schema);
            self.state.pagination = initial.pagination;
            self.state.pinned = initial.pinned;
            self.state.filter_bar_visible = initial.filter_bar_visible;
        } else {
            self.state.pagination.page = 0;
        }
        self.persist();
    }

    /// Clear every filter value, ignoring defaults; pins and paging stay
    pub fn empty_view_filters(&mut self) {
        self.state.filters = self.schema.empty_filters();
        self.persist();
    }

    /// Programmatic navigation from a dashboard tile
    pub fn apply_drill_in(&mut self, filters: &FilterSet) {
        self.state.filters = self.schema.empty_filters();
        for (path, value) in filters.leaves() {
            self.put_filter(path.category, &path.field, value.clone());
        }
        self.state.pagination.page = 0;
        self.persist();
    }

    pub fn active_filter_count(&self) -> usize {
        active_filter_count(&self.state.filters)
    }

    pub fn is_default(&self) -> bool {
        is_filters_equal(&self.state.filters, &self.schema.default_filters())
    }

    pub fn set_page(&mut self, page: usize) {
        if self.state.pagination.page != page {
            self.state.pagination.page = page;
            self.persist();
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.state.pagination.page_size = page_size;
        self.state.pagination.page = 0;
        self.persist();
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.state.pagination.sort = sort;
        self.state.pagination.page = 0;
        self.persist();
    }

    /// Same column flips direction, a new column starts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        let next = match &self.state.pagination.sort {
            Some(current) if current.field == field => SortSpec {
                field: field.to_string(),
                direction: current.direction.toggled(),
            },
            _ => SortSpec {
                field: field.to_string(),
                direction: SortDirection::Asc,
            },
        };
        self.set_sort(Some(next));
    }

    pub fn set_filter_bar_visible(&mut self, visible: bool) {
        if self.state.filter_bar_visible != visible {
            self.state.filter_bar_visible = visible;
            self.persist();
        }
    }

    /// Payload for `POST /api/<view>/list`
    pub fn list_request(&self) -> ListRequest {
        ListRequest {
            filters: self.state.filters.compacted(),
            page: self.state.pagination.page,
            page_size: self.state.pagination.page_size,
            sort: self.state.pagination.sort.clone(),
        }
    }

    fn persist(&self) {
        if let Err(e) = save_state(self.storage.as_ref(), &self.key, self.schema.version, &self.state) {
            log::warn!("Failed to persist {}: {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::persistence::MemoryStorage;
    use crate::shared::filter_state::schema::{FieldKind, FieldSchema};
    use crate::shared::option_resolver::source::OptionSource;

    fn ids(list: &[&str]) -> Vec<TaggedId> {
        list.iter().map(|id| TaggedId::new(*id, format!("TR-{}", id))).collect()
    }

    fn schema(kind: ViewKind, reset_page: bool) -> Arc<ViewSchema> {
        Arc::new(
            ViewSchema::new(kind)
                .version(3)
                .reset_page_on_filter_change(reset_page)
                .field(FieldSchema::new(
                    FilterCategory::Asset,
                    "asset_ids",
                    "Assets",
                    FieldKind::multi_select(OptionSource::Remote("/api/assets/options".into())),
                ))
                .field(
                    FieldSchema::new(FilterCategory::Operational, "min_idle_days", "Min idle days", FieldKind::Number)
                        .with_default(FilterValue::Number(2.0)),
                )
                .field(FieldSchema::new(FilterCategory::Sensor, "door_open", "Door open", FieldKind::Toggle))
                .pinned(FilterCategory::Asset, "asset_ids"),
        )
    }

    fn open(kind: ViewKind, reset_page: bool, storage: Arc<MemoryStorage>) -> FilterStore {
        FilterStore::open(schema(kind, reset_page), "u1", storage, DEFAULT_RECENT_CAP)
    }

    #[test]
    fn test_set_filter_resets_page_when_view_asks() {
        let mut store = open(ViewKind::IdleAssets, true, Arc::new(MemoryStorage::new()));
        store.set_page(4);
        assert!(store.set_filter(FilterCategory::Sensor, "door_open", FilterValue::Bool(true)));
        assert_eq!(store.pagination().page, 0);
    }

    #[test]
    fn test_set_filter_keeps_page_when_view_does_not_reset() {
        let mut store = open(ViewKind::YardCheck, false, Arc::new(MemoryStorage::new()));
        store.set_page(4);
        store.set_filter(FilterCategory::Sensor, "door_open", FilterValue::Bool(true));
        assert_eq!(store.pagination().page, 4);
        assert_eq!(store.pagination().page_size, 50);
    }

    #[test]
    fn test_set_filter_rejects_wrong_shape_and_unknown_field() {
        let mut store = open(ViewKind::IdleAssets, true, Arc::new(MemoryStorage::new()));
        store.set_page(2);
        assert!(!store.set_filter(FilterCategory::Sensor, "door_open", FilterValue::Text("yes".into())));
        assert!(!store.set_filter(FilterCategory::Display, "unit", FilterValue::Text("km".into())));
        assert_eq!(store.filter(FilterCategory::Sensor, "door_open"), &FilterValue::Null);
        assert_eq!(store.pagination().page, 2);
    }

    #[test]
    fn test_page_size_and_sort_reset_page() {
        let mut store = open(ViewKind::YardCheck, false, Arc::new(MemoryStorage::new()));
        store.set_page(3);
        store.set_page_size(100);
        assert_eq!(store.pagination().page, 0);

        store.set_page(3);
        store.toggle_sort("asset_name");
        assert_eq!(store.pagination().page, 0);
        assert_eq!(store.pagination().sort, Some(SortSpec::asc("asset_name")));
        store.toggle_sort("asset_name");
        assert_eq!(store.pagination().sort, Some(SortSpec::desc("asset_name")));
        store.toggle_sort("idle_days");
        assert_eq!(store.pagination().sort, Some(SortSpec::asc("idle_days")));
    }

    #[test]
    fn test_recent_values_bounded_newest_first() {
        let mut store = open(ViewKind::IdleAssets, true, Arc::new(MemoryStorage::new()));
        store.set_recent_filter(FilterCategory::Asset, "asset_ids", &ids(&["1", "2", "3"]));
        store.set_recent_filter(FilterCategory::Asset, "asset_ids", &ids(&["2", "4"]));
        store.set_recent_filter(FilterCategory::Asset, "asset_ids", &ids(&["5", "6", "7"]));

        let recent = store.recent_filter(FilterCategory::Asset, "asset_ids");
        assert_eq!(recent.len(), DEFAULT_RECENT_CAP);
        let order: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["7", "6", "5", "4", "3"]);
    }

    #[test]
    fn test_recent_cap_from_config() {
        let mut store = FilterStore::open(
            schema(ViewKind::IdleAssets, true),
            "u1",
            Arc::new(MemoryStorage::new()),
            2,
        );
        store.set_recent_filter(FilterCategory::Asset, "asset_ids", &ids(&["1", "2", "3"]));
        assert_eq!(store.recent_filter(FilterCategory::Asset, "asset_ids").len(), 2);
    }

    #[test]
    fn test_pin_is_idempotent() {
        let mut store = open(ViewKind::IdleAssets, true, Arc::new(MemoryStorage::new()));
        store.set_pinned_filter(FilterCategory::Sensor, "door_open", true);
        let once = store.state().pinned.clone();
        store.set_pinned_filter(FilterCategory::Sensor, "door_open", true);
        assert_eq!(store.state().pinned, once);
        assert!(store.is_filter_pinned(FilterCategory::Sensor, "door_open"));

        store.set_pinned_filter(FilterCategory::Sensor, "door_open", false);
        store.set_pinned_filter(FilterCategory::Sensor, "door_open", false);
        assert!(!store.is_filter_pinned(FilterCategory::Sensor, "door_open"));
        assert!(store.is_filter_pinned(FilterCategory::Asset, "asset_ids"));
    }

    #[test]
    fn test_clear_all_returns_to_default_count() {
        let mut store = open(ViewKind::IdleAssets, true, Arc::new(MemoryStorage::new()));
        assert_eq!(store.active_filter_count(), 1);
        assert!(store.is_default());

        store.set_filter(FilterCategory::Asset, "asset_ids", FilterValue::Ids(ids(&["1", "2", "3"])));
        assert_eq!(store.active_filter_count(), 2);
        assert!(!store.is_default());

        store.reset_view_filters(false);
        assert_eq!(store.active_filter_count(), 1);
        assert!(store.is_default());
    }

    #[test]
    fn test_reset_with_base_restores_paging_and_pins() {
        let mut store = open(ViewKind::IdleAssets, true, Arc::new(MemoryStorage::new()));
        store.set_page_size(200);
        store.set_page(5);
        store.set_pinned_filter(FilterCategory::Sensor, "door_open", true);
        store.set_pinned_filter(FilterCategory::Asset, "asset_ids", false);

        store.reset_view_filters(false);
        assert_eq!(store.pagination().page_size, 200);
        assert!(store.is_filter_pinned(FilterCategory::Sensor, "door_open"));

        store.reset_view_filters(true);
        assert_eq!(store.pagination(), &Pagination { page: 0, page_size: 50, sort: None });
        assert_eq!(store.pinned_fields(), vec![FieldPath::new(FilterCategory::Asset, "asset_ids")]);
    }

    #[test]
    fn test_empty_view_filters_ignores_defaults() {
        let mut store = open(ViewKind::IdleAssets, true, Arc::new(MemoryStorage::new()));
        store.set_page_size(100);
        store.set_page(3);
        store.empty_view_filters();
        assert_eq!(store.active_filter_count(), 0);
        assert!(!store.is_default());
        assert_eq!(store.pagination().page, 3);
        assert!(store.is_filter_pinned(FilterCategory::Asset, "asset_ids"));
    }

    #[test]
    fn test_drill_in_sets_only_given_filters() {
        let mut store = open(ViewKind::IdleAssets, true, Arc::new(MemoryStorage::new()));
        store.set_page(7);
        let drill = FilterSet::new().with(FilterCategory::Sensor, "door_open", FilterValue::Bool(true));
        store.apply_drill_in(&drill);
        assert_eq!(store.filter(FilterCategory::Sensor, "door_open"), &FilterValue::Bool(true));
        assert_eq!(store.filter(FilterCategory::Operational, "min_idle_days"), &FilterValue::Null);
        assert_eq!(store.pagination().page, 0);
    }

    #[test]
    fn test_state_survives_reopen() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut store = open(ViewKind::IdleAssets, true, storage.clone());
            store.set_filter(FilterCategory::Sensor, "door_open", FilterValue::Bool(false));
            store.set_pinned_filter(FilterCategory::Sensor, "door_open", true);
            store.set_page(2);
        }
        let store = open(ViewKind::IdleAssets, true, storage.clone());
        assert_eq!(store.filter(FilterCategory::Sensor, "door_open"), &FilterValue::Bool(false));
        assert!(store.is_filter_pinned(FilterCategory::Sensor, "door_open"));
        assert_eq!(store.pagination().page, 2);

        // a different user does not see it
        let other = FilterStore::open(schema(ViewKind::IdleAssets, true), "u2", storage, DEFAULT_RECENT_CAP);
        assert_eq!(other.filter(FilterCategory::Sensor, "door_open"), &FilterValue::Null);
    }

    #[test]
    fn test_schema_version_bump_discards_state() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut store = open(ViewKind::IdleAssets, true, storage.clone());
            store.set_filter(FilterCategory::Sensor, "door_open", FilterValue::Bool(true));
        }
        let bumped = Arc::new((*schema(ViewKind::IdleAssets, true)).clone().version(4));
        let store = FilterStore::open(bumped, "u1", storage, DEFAULT_RECENT_CAP);
        assert_eq!(store.filter(FilterCategory::Sensor, "door_open"), &FilterValue::Null);
    }

    #[test]
    fn test_list_request_omits_empty_filters() {
        let mut store = open(ViewKind::IdleAssets, true, Arc::new(MemoryStorage::new()));
        store.set_filter(FilterCategory::Asset, "asset_ids", FilterValue::Ids(ids(&["9"])));
        let req = store.list_request();
        assert!(req.filters.get(FilterCategory::Sensor, "door_open").is_none());
        assert_eq!(req.filters.get(FilterCategory::Asset, "asset_ids").map(|v| v.as_ids().len()), Some(1));
        assert_eq!(req.page_size, 50);
    }
}
