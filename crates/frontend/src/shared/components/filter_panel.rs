use contracts::shared::filters::FilterValue;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::filter_field::FilterField;
use crate::shared::filter_state::ViewStore;
use crate::shared::icons::icon;

/// Collapsible filter drawer of a view: every schema field grouped by
/// category, active filter chips and the reset actions.
#[component]
pub fn FilterPanel(
    store: ViewStore,

    /// Whether the drawer is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Rendered in the header, normally the pagination controls
    children: Children,
) -> impl IntoView {
    let active_filters_count = store.active_filter_count();
    let is_default = store.is_default();
    let bar_visible = store.filter_bar_visible();

    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    let groups = store.with_untracked(|s| {
        let schema = s.schema();
        schema
            .categories()
            .into_iter()
            .map(|category| {
                let fields: Vec<_> = schema.fields_in(category).cloned().collect();
                (category, fields)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {children()}
                </div>
                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| store.set_filter_bar_visible(!bar_visible.get_untracked())
                    >
                        {icon("pin")}
                        {move || if bar_visible.get() { " Hide bar" } else { " Show bar" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || is_default.get())
                        on_click=move |_| store.reset_view_filters(false)
                    >
                        "Clear all"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| store.reset_view_filters(true)
                    >
                        "Reset view"
                    </Button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {groups
                        .into_iter()
                        .map(|(category, fields)| view! {
                            <fieldset class="filter-panel__group">
                                <legend>{category.title()}</legend>
                                <Flex gap=FlexGap::Medium>
                                    {fields
                                        .into_iter()
                                        .map(|field| view! { <FilterField store=store field=field /> })
                                        .collect_view()}
                                </Flex>
                            </fieldset>
                        })
                        .collect_view()}
                    <FilterTags store=store />
                </div>
            </div>
        </div>
    }
}

/// Chips for every active leaf, removing a chip clears that leaf
#[component]
pub fn FilterTags(store: ViewStore) -> impl IntoView {
    let active = store.active_filters();

    view! {
        <div class="filter-tags">
            <For
                each=move || active.get()
                key=|(path, value)| format!("{}={:?}", path, value)
                children=move |(path, value)| {
                    let label = store.with_untracked(|s| {
                        s.schema()
                            .find(path.category, &path.field)
                            .map(|f| f.label)
                            .unwrap_or_default()
                    });
                    let category = path.category;
                    let field = path.field.clone();
                    view! {
                        <FilterTag
                            label=format!("{}: {}", label, value.display())
                            on_remove=Callback::new(move |_| {
                                store.set_filter(category, &field, FilterValue::Null);
                            })
                        />
                    }
                }
            />
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
