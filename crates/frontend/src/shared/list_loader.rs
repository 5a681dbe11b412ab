use contracts::shared::filters::{ListRequest, ListResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::api::ApiError;
use crate::shared::filter_state::ViewStore;

/// Table rows of one view plus their fetch status
pub struct ListLoader<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub total_count: RwSignal<usize>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListLoader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListLoader<T> {}

impl<T: Send + Sync + 'static> ListLoader<T> {
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.total_count.get().div_ceil(page_size)
    }
}

/// Reload whenever the store's list request changes. Only the answer to the
/// latest request is applied.
pub fn use_list_loader<T, F, Fut>(store: ViewStore, fetch: F) -> ListLoader<T>
where
    T: Send + Sync + 'static,
    F: Fn(ListRequest) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<ListResponse<T>, ApiError>> + 'static,
{
    let loader = ListLoader {
        rows: RwSignal::new(Vec::new()),
        total_count: RwSignal::new(0),
        is_loading: RwSignal::new(false),
        error: RwSignal::new(None),
    };
    let request = store.list_request();
    let latest = StoredValue::new(0u64);
    let view = store.kind().name();

    Effect::new(move |_| {
        let req = request.get();
        let Some(seq) = latest.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        loader.is_loading.set(true);
        loader.error.set(None);

        spawn_local(async move {
            let result = fetch(req).await;
            let is_latest = latest.try_with_value(|n| *n == seq).unwrap_or(false);
            if !is_latest {
                return;
            }
            match result {
                Ok(response) => {
                    loader.total_count.set(response.total_count);
                    loader.rows.set(response.items);
                }
                Err(e) => {
                    log::error!("Failed to load {} list: {}", view, e);
                    loader.error.set(Some(e.to_string()));
                }
            }
            loader.is_loading.set(false);
        });
    });

    loader
}
