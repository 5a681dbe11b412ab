use leptos::prelude::*;

use crate::shared::components::filter_field::FilterField;
use crate::shared::filter_state::ViewStore;

/// Pinned fields of a view, shown outside the filter drawer while the
/// view's filter bar is visible
#[component]
pub fn PinnedFilterBar(store: ViewStore) -> impl IntoView {
    let pinned = store.pinned_fields();
    let visible = store.filter_bar_visible();

    view! {
        <Show when=move || visible.get() && !pinned.get().is_empty()>
            <div class="pinned-filter-bar">
                <For
                    each=move || pinned.get()
                    key=|path| path.to_string()
                    children=move |path| {
                        store
                            .with_untracked(|s| s.schema().find(path.category, &path.field).cloned())
                            .map(|field| view! { <FilterField store=store field=field /> })
                    }
                />
            </div>
        </Show>
    }
}
