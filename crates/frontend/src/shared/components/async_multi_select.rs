use contracts::shared::filters::{FilterCategory, FilterValue, TaggedId};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use crate::shared::config::AppConfig;
use crate::shared::filter_state::ViewStore;
use crate::shared::icons::icon;
use crate::shared::option_resolver::source::fetch_options;
use crate::shared::option_resolver::{Debouncer, FetchOutcome, OptionResolver, OptionSource, ResolveError};

/// One open/close cycle of the dropdown and the options picked during it
#[derive(Debug, Default)]
pub struct PickSession {
    open: bool,
    picks: Vec<TaggedId>,
}

impl PickSession {
    /// False when already open
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Picks are kept in the order they happened; picking again moves an
    /// option to the end. Ignored while closed.
    pub fn record(&mut self, option: TaggedId) {
        if !self.open {
            return;
        }
        self.picks.retain(|p| p.id != option.id);
        self.picks.push(option);
    }

    /// Ends the session and returns its picks, oldest first. Empty when the
    /// session was not open.
    pub fn close(&mut self) -> Vec<TaggedId> {
        if !std::mem::replace(&mut self.open, false) {
            return Vec::new();
        }
        std::mem::take(&mut self.picks)
    }
}

/// Multi-select bound to one `Ids` leaf of a view store.
///
/// Typing is debounced; every new remote search aborts the request still in
/// flight and late answers for an older query are dropped. Selections made
/// while the dropdown is open go into the field's recent values when it
/// closes.
#[component]
pub fn AsyncMultiSelect(
    store: ViewStore,
    category: FilterCategory,
    #[prop(into)] field: String,
    source: OptionSource,
    max_selected: Option<usize>,
    #[prop(optional)] permanent_ids: Vec<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let option_limit = config.filters.option_limit;

    let field = StoredValue::new(field);
    let endpoint = match &source {
        OptionSource::Remote(path) => Some(path.clone()),
        OptionSource::Static(_) => None,
    };
    let endpoint = StoredValue::new(endpoint);

    let initial_selected = store.with_untracked(|s| {
        s.filter(category, &field.get_value()).as_ids().to_vec()
    });
    let initial_recent =
        store.with_untracked(|s| s.recent_filter(category, &field.get_value()).to_vec());

    let resolver = RwSignal::new_local(
        OptionResolver::<AbortController>::new(source)
            .with_permanent_ids(permanent_ids)
            .with_max_selected(max_selected)
            .with_recent(initial_recent)
            .with_selected(initial_selected),
    );
    let debouncer = StoredValue::new(Debouncer::new(config.filters.search_debounce_ms));
    let is_open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let session = StoredValue::new(PickSession::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // store -> resolver: resets, drill-ins and other controls on the same leaf
    let store_value = store.filter(category, &field.get_value());
    let store_recent = store.recent(category, &field.get_value());
    Effect::new(move |_| {
        let ids = store_value.with(|v| v.as_ids().to_vec());
        resolver.update(|r| r.set_selected(ids));
    });
    Effect::new(move |_| {
        let recent = store_recent.get();
        resolver.update(|r| r.set_recent(recent));
    });

    let commit_selection = move || {
        let selected = resolver.with_untracked(|r| r.selected().to_vec());
        store.set_filter(category, &field.get_value(), FilterValue::Ids(selected));
    };

    let run_search = move |text: String| {
        let needs_fetch = resolver.try_update(|r| r.set_query(&text)).unwrap_or(false);
        let Some(endpoint) = endpoint.get_value() else {
            return;
        };
        if !needs_fetch {
            return;
        }
        let Some(generation) = debouncer.try_update_value(|d| d.schedule()) else {
            return;
        };
        let delay = debouncer.with_value(|d| d.delay_ms());

        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let still_current = debouncer
                .try_with_value(|d| d.is_current(generation))
                .unwrap_or(false);
            if !still_current {
                return;
            }

            let controller = match AbortController::new() {
                Ok(controller) => controller,
                Err(e) => {
                    log::warn!("AbortController unavailable: {:?}", e);
                    return;
                }
            };
            let signal = controller.signal();
            let Some(ticket) = resolver.try_update(|r| r.begin_search(&text, controller)) else {
                return;
            };

            let result = fetch_options(&endpoint, &text, option_limit, Some(&signal))
                .await
                .map_err(ResolveError::from);

            match resolver.try_update(|r| r.complete(ticket, result)) {
                Some(FetchOutcome::Failed(message)) => {
                    log::warn!("Option search on {} failed: {}", endpoint, message);
                }
                Some(FetchOutcome::Stale) | Some(FetchOutcome::Aborted) => {
                    log::debug!("Option search for '{}' superseded", text);
                }
                Some(FetchOutcome::Applied) | None => {}
            }
        });
    };

    let open = move || {
        if !session.try_update_value(|s| s.open()).unwrap_or(false) {
            return;
        }
        is_open.set(true);
        let needs_initial = resolver.with_untracked(|r| r.source().is_remote() && !r.is_loading());
        if needs_initial {
            run_search(query.get_untracked());
        }
    };

    let close = move || {
        let picks = session.try_update_value(|s| s.close()).unwrap_or_default();
        is_open.set(false);
        if !picks.is_empty() {
            store.set_recent_filter(category, &field.get_value(), &picks);
        }
    };

    let toggle_option = move |option: TaggedId| {
        let changed = resolver.try_update(|r| r.toggle(option.clone())).unwrap_or(false);
        if !changed {
            return;
        }
        if resolver.with_untracked(|r| r.is_selected(&option.id)) {
            session.update_value(|s| s.record(option));
        }
        commit_selection();
    };

    let remove_chip = move |id: String| {
        let changed = resolver.try_update(|r| r.deselect(&id)).unwrap_or(false);
        if changed {
            commit_selection();
        }
    };

    let clear_all = move |_| {
        resolver.update(|r| r.clear_selection());
        commit_selection();
    };

    on_cleanup(move || {
        debouncer.try_update_value(|d| d.cancel());
        resolver.try_update(|r| r.cancel_pending());
    });

    let placeholder = placeholder.unwrap_or_else(|| "Search…".to_string());

    view! {
        <div class="multi-select" class:multi-select--open=move || is_open.get()>
            <div
                class="multi-select__control"
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        let _ = input.focus();
                    }
                    open();
                }
            >
                {move || {
                    resolver.with(|r| {
                        r.selected()
                            .iter()
                            .map(|option| {
                                let permanent = r.is_permanent(&option.id);
                                let id = option.id.clone();
                                view! {
                                    <span class="multi-select__chip" class:multi-select__chip--permanent=permanent>
                                        {option.label.clone()}
                                        {(!permanent).then(|| view! {
                                            <span
                                                class="multi-select__chip-remove"
                                                on:mousedown=move |ev| {
                                                    ev.prevent_default();
                                                    ev.stop_propagation();
                                                    remove_chip(id.clone());
                                                }
                                            >
                                                {icon("x")}
                                            </span>
                                        })}
                                    </span>
                                }
                            })
                            .collect_view()
                    })
                }}
                <input
                    node_ref=input_ref
                    class="multi-select__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || query.get()
                    on:focus=move |_| open()
                    on:blur=move |_| close()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        query.set(text.clone());
                        run_search(text);
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Escape" {
                            close();
                        }
                    }
                />
                <Show when=move || resolver.with(|r| r.selected().iter().any(|o| !r.is_permanent(&o.id)))>
                    <button
                        class="multi-select__clear"
                        title="Clear selection"
                        on:mousedown=move |ev| {
                            ev.prevent_default();
                            clear_all(());
                        }
                    >
                        {icon("x")}
                    </button>
                </Show>
            </div>

            <Show when=move || is_open.get()>
                <div class="multi-select__dropdown">
                    {max_selected.map(|max| view! {
                        <div class="multi-select__hint">{format!("Up to {} selections", max)}</div>
                    })}
                    {move || {
                        resolver.with(|r| {
                            if let Some(error) = r.error() {
                                return view! {
                                    <div class="multi-select__error">{error.to_string()}</div>
                                }
                                .into_any();
                            }
                            let options = r.visible_options();
                            if options.is_empty() {
                                let text = if r.is_loading() { "Loading…" } else { "No options" };
                                return view! { <div class="multi-select__empty">{text}</div> }.into_any();
                            }
                            options
                                .into_iter()
                                .map(|option| {
                                    let selected = r.is_selected(&option.id);
                                    let permanent = r.is_permanent(&option.id);
                                    let label = option.label.clone();
                                    view! {
                                        <div
                                            class="multi-select__option"
                                            class:multi-select__option--selected=selected
                                            class:multi-select__option--permanent=permanent
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                toggle_option(option.clone());
                                            }
                                        >
                                            <span class="multi-select__check">{if selected { "✓" } else { "" }}</span>
                                            <span>{label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        })
                    }}
                    <Show when=move || resolver.with(|r| r.is_loading())>
                        <div class="multi-select__loading">"Loading…"</div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p102_idle_assets::ui::list::schema;
    use crate::shared::filter_state::persistence::MemoryStorage;
    use crate::shared::filter_state::FilterStore;
    use std::sync::Arc;

    fn trailer(id: &str) -> TaggedId {
        TaggedId::new(id, format!("Trailer {}", id))
    }

    #[test]
    fn test_latest_pick_is_first_recent_value() {
        let mut store = FilterStore::open(Arc::new(schema()), "u1", Arc::new(MemoryStorage::new()), 5);
        let mut session = PickSession::default();
        assert!(session.open());
        for id in ["A", "B", "C"] {
            session.record(trailer(id));
        }
        store.set_recent_filter(FilterCategory::Asset, "asset_ids", &session.close());

        let order: Vec<&str> = store
            .recent_filter(FilterCategory::Asset, "asset_ids")
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_repicking_moves_option_to_latest() {
        let mut session = PickSession::default();
        session.open();
        session.record(trailer("A"));
        session.record(trailer("B"));
        session.record(trailer("A"));
        let ids: Vec<String> = session.close().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_close_only_once_per_open() {
        let mut session = PickSession::default();
        assert!(session.open());
        assert!(!session.open());
        session.record(trailer("A"));
        assert_eq!(session.close().len(), 1);
        assert!(session.close().is_empty());

        session.record(trailer("B"));
        assert!(session.close().is_empty());
    }
}
