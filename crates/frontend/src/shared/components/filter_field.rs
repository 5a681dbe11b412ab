use contracts::shared::filters::{DateRange, FilterValue};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::async_multi_select::AsyncMultiSelect;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::filter_state::{FieldKind, FieldSchema, ViewStore};
use crate::shared::icons::icon;

fn text_value(raw: String) -> FilterValue {
    if raw.trim().is_empty() {
        FilterValue::Null
    } else {
        FilterValue::Text(raw)
    }
}

fn number_value(raw: &str) -> FilterValue {
    raw.trim()
        .parse::<f64>()
        .map(FilterValue::Number)
        .unwrap_or(FilterValue::Null)
}

/// Label, pin toggle and the editor matching the field's kind
#[component]
pub fn FilterField(store: ViewStore, field: FieldSchema) -> impl IntoView {
    let category = field.category;
    let name = field.name;
    let value = store.filter(category, name);
    let is_pinned = store.is_pinned(category, name);

    let set = move |v: FilterValue| store.set_filter(category, name, v);

    let control = match field.kind.clone() {
        FieldKind::MultiSelect {
            source,
            max_selected,
            permanent_ids,
        } => view! {
            <AsyncMultiSelect
                store=store
                category=category
                field=name
                source=source
                max_selected=max_selected
                permanent_ids=permanent_ids
            />
        }
        .into_any(),
        FieldKind::Select { options } => view! {
            <select
                class="form__select"
                prop:value=move || value.get().as_text().unwrap_or_default().to_string()
                on:change=move |ev| set(text_value(event_target_value(&ev)))
            >
                <option value="">"Any"</option>
                {options
                    .into_iter()
                    .map(|o| view! { <option value=o.id.clone()>{o.label.clone()}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Text => view! {
            <input
                type="text"
                class="form__input"
                prop:value=move || value.get().as_text().unwrap_or_default().to_string()
                on:change=move |ev| set(text_value(event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldKind::Number => view! {
            <input
                type="number"
                class="form__input form__input--number"
                prop:value=move || value.get().as_number().map(|n| n.to_string()).unwrap_or_default()
                on:change=move |ev| set(number_value(&event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldKind::Toggle => view! {
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || value.get().as_bool().unwrap_or(false)
                on:change=move |ev| {
                    // off means "not filtering", not "false"
                    if event_target_checked(&ev) {
                        set(FilterValue::Bool(true));
                    } else {
                        set(FilterValue::Null);
                    }
                }
            />
        }
        .into_any(),
        FieldKind::DateRange => view! {
            <DateRangePicker
                value=Signal::derive(move || value.get().as_date_range().cloned().unwrap_or_default())
                on_change=Callback::new(move |range: DateRange| {
                    if range.is_empty() {
                        set(FilterValue::Null);
                    } else {
                        set(FilterValue::DateRange(range));
                    }
                })
            />
        }
        .into_any(),
    };

    view! {
        <div class="filter-field">
            <div class="filter-field__header">
                <Label>{field.label}</Label>
                <button
                    class="filter-field__pin"
                    class:filter-field__pin--active=move || is_pinned.get()
                    title=move || if is_pinned.get() { "Unpin from filter bar" } else { "Pin to filter bar" }
                    on:click=move |_| store.toggle_pinned(category, name)
                >
                    {icon("pin")}
                </button>
            </div>
            {control}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_null() {
        assert_eq!(text_value("  ".into()), FilterValue::Null);
        assert_eq!(text_value("ABC".into()), FilterValue::Text("ABC".into()));
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(number_value("2.5"), FilterValue::Number(2.5));
        assert_eq!(number_value(""), FilterValue::Null);
        assert_eq!(number_value("abc"), FilterValue::Null);
    }
}
