//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Idle days"
//!     sort_field="idle_days"
//!     align="right"
//!     current_sort=Signal::derive(move || store.pagination().get().sort)
//!     on_sort=Callback::new(move |field: String| store.toggle_sort(&field))
//! />
//! ```

use contracts::shared::filters::{SortDirection, SortSpec};
use leptos::prelude::*;
use thaw::*;

pub fn sort_indicator(current: Option<&SortSpec>, field: &str) -> &'static str {
    match current {
        Some(spec) if spec.field == field => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn sort_class(current: Option<&SortSpec>, field: &str) -> &'static str {
    match current {
        Some(spec) if spec.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,

    /// Column key sent to the server
    #[prop(into)]
    sort_field: String,

    #[prop(into)] current_sort: Signal<Option<SortSpec>>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)] min_width: f64,

    /// left/right
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field = StoredValue::new(sort_field);

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field.get_value())
            >
                {label}
                <span class=move || {
                    current_sort.with(|s| sort_class(s.as_ref(), &sort_field.read_value()))
                }>
                    {move || current_sort.with(|s| sort_indicator(s.as_ref(), &sort_field.read_value()))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_follows_direction() {
        let asc = SortSpec::asc("speed_kph");
        let desc = SortSpec::desc("speed_kph");
        assert_eq!(sort_indicator(Some(&asc), "speed_kph"), " ▲");
        assert_eq!(sort_indicator(Some(&desc), "speed_kph"), " ▼");
        assert_eq!(sort_indicator(Some(&desc), "asset_name"), " ⇅");
        assert_eq!(sort_indicator(None, "asset_name"), " ⇅");
    }

    #[test]
    fn test_class_marks_active_column() {
        let asc = SortSpec::asc("trips");
        assert!(sort_class(Some(&asc), "trips").ends_with("--active"));
        assert_eq!(sort_class(Some(&asc), "distance_km"), "table__sort-indicator");
    }
}
