use contracts::shared::filters::{FieldPath, FilterCategory, FilterSet, FilterValue, ListRequest, TaggedId};
use leptos::prelude::*;
use std::sync::Arc;

use super::persistence::KeyValueStorage;
use super::schema::{ViewKind, ViewSchema};
use super::store::{FilterStore, Pagination};

/// Reactive handle over one view's [`FilterStore`]
#[derive(Clone, Copy)]
pub struct ViewStore {
    inner: RwSignal<FilterStore>,
}

impl ViewStore {
    pub fn new(store: FilterStore) -> Self {
        Self {
            inner: RwSignal::new(store),
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.inner.with_untracked(|s| s.kind())
    }

    /// Tracked read
    pub fn with<R>(&self, f: impl FnOnce(&FilterStore) -> R) -> R {
        self.inner.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&FilterStore) -> R) -> R {
        self.inner.with_untracked(f)
    }

    pub fn update(&self, f: impl FnOnce(&mut FilterStore)) {
        self.inner.update(f);
    }

    // ------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------

    pub fn filter(&self, category: FilterCategory, field: &str) -> Signal<FilterValue> {
        let inner = self.inner;
        let field = field.to_string();
        Signal::derive(move || inner.with(|s| s.filter(category, &field).clone()))
    }

    pub fn recent(&self, category: FilterCategory, field: &str) -> Signal<Vec<TaggedId>> {
        let inner = self.inner;
        let field = field.to_string();
        Signal::derive(move || inner.with(|s| s.recent_filter(category, &field).to_vec()))
    }

    pub fn is_pinned(&self, category: FilterCategory, field: &str) -> Signal<bool> {
        let inner = self.inner;
        let field = field.to_string();
        Signal::derive(move || inner.with(|s| s.is_filter_pinned(category, &field)))
    }

    pub fn pinned_fields(&self) -> Signal<Vec<FieldPath>> {
        let inner = self.inner;
        Signal::derive(move || inner.with(|s| s.pinned_fields()))
    }

    pub fn active_filter_count(&self) -> Signal<usize> {
        let inner = self.inner;
        Signal::derive(move || inner.with(|s| s.active_filter_count()))
    }

    pub fn is_default(&self) -> Signal<bool> {
        let inner = self.inner;
        Signal::derive(move || inner.with(|s| s.is_default()))
    }

    pub fn pagination(&self) -> Signal<Pagination> {
        let inner = self.inner;
        Signal::derive(move || inner.with(|s| s.pagination().clone()))
    }

    pub fn filter_bar_visible(&self) -> Signal<bool> {
        let inner = self.inner;
        Signal::derive(move || inner.with(|s| s.state().filter_bar_visible))
    }

    /// Active leaves for filter chips
    pub fn active_filters(&self) -> Signal<Vec<(FieldPath, FilterValue)>> {
        let inner = self.inner;
        Signal::derive(move || {
            inner.with(|s| {
                s.filters()
                    .active_leaves()
                    .map(|(path, value)| (path, value.clone()))
                    .collect()
            })
        })
    }

    pub fn list_request(&self) -> Memo<ListRequest> {
        let inner = self.inner;
        Memo::new(move |_| inner.with(|s| s.list_request()))
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    pub fn set_filter(&self, category: FilterCategory, field: &str, value: FilterValue) {
        self.inner.update(|s| {
            s.set_filter(category, field, value);
        });
    }

    pub fn set_recent_filter(&self, category: FilterCategory, field: &str, values: &[TaggedId]) {
        self.inner.update(|s| s.set_recent_filter(category, field, values));
    }

    pub fn set_pinned_filter(&self, category: FilterCategory, field: &str, pinned: bool) {
        self.inner.update(|s| s.set_pinned_filter(category, field, pinned));
    }

    pub fn toggle_pinned(&self, category: FilterCategory, field: &str) {
        self.inner.update(|s| {
            let pinned = s.is_filter_pinned(category, field);
            s.set_pinned_filter(category, field, !pinned);
        });
    }

    pub fn reset_view_filters(&self, include_base: bool) {
        self.inner.update(|s| s.reset_view_filters(include_base));
    }

    pub fn empty_view_filters(&self) {
        self.inner.update(|s| s.empty_view_filters());
    }

    pub fn apply_drill_in(&self, filters: &FilterSet) {
        self.inner.update(|s| s.apply_drill_in(filters));
    }

    pub fn set_page(&self, page: usize) {
        self.inner.update(|s| s.set_page(page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.inner.update(|s| s.set_page_size(page_size));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.inner.update(|s| s.toggle_sort(field));
    }

    pub fn set_filter_bar_visible(&self, visible: bool) {
        self.inner.update(|s| s.set_filter_bar_visible(visible));
    }
}

/// One store per view, created once for the application scope and shared
/// through context
#[derive(Clone)]
pub struct ViewStores {
    stores: Arc<Vec<ViewStore>>,
}

impl ViewStores {
    pub fn open(
        schemas: Vec<ViewSchema>,
        user_id: &str,
        storage: Arc<dyn KeyValueStorage>,
        recent_cap: usize,
    ) -> Self {
        let stores = schemas
            .into_iter()
            .map(|schema| {
                let store = FilterStore::open(Arc::new(schema), user_id, storage.clone(), recent_cap);
                ViewStore::new(store)
            })
            .collect();
        Self {
            stores: Arc::new(stores),
        }
    }

    pub fn get(&self, kind: ViewKind) -> Option<ViewStore> {
        self.stores.iter().copied().find(|s| s.kind() == kind)
    }
}

/// Store of `kind` from the [`ViewStores`] context
pub fn use_view_store(kind: ViewKind) -> ViewStore {
    use_context::<ViewStores>()
        .expect("ViewStores context not found")
        .get(kind)
        .expect("view store not registered")
}
