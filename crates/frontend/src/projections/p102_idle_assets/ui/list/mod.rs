mod state;

pub use state::schema;

use leptos::prelude::*;
use thaw::*;

use crate::projections::p102_idle_assets::api::fetch_idle_assets;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::pinned_filter_bar::PinnedFilterBar;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::config::AppConfig;
use crate::shared::filter_state::{use_view_store, ViewKind};
use crate::shared::format::{format_flag, format_number, format_timestamp, or_dash};
use crate::shared::icons::icon;
use crate::shared::list_loader::use_list_loader;

const COLUMNS: usize = 6;

#[component]
pub fn IdleAssetsList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let store = use_view_store(ViewKind::IdleAssets);
    let retries = config.api.fetch_retries;
    let loader = use_list_loader(store, move |request| fetch_idle_assets(request, retries));

    let is_expanded = RwSignal::new(false);
    let pagination = store.pagination();
    let current_sort = Signal::derive(move || pagination.get().sort);
    let on_sort = Callback::new(move |field: String| store.toggle_sort(&field));

    view! {
        <div class="page page--wide">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("idle")}
                    <h1 class="page__title">{ViewKind::IdleAssets.title()}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || loader.total_count.get().to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <span class="text-muted">
                        {move || if loader.is_loading.get() { "Loading…" } else { "" }}
                    </span>
                </div>
            </div>

            <PinnedFilterBar store=store />

            <FilterPanel store=store is_expanded=is_expanded>
                <PaginationControls
                    current_page=Signal::derive(move || pagination.get().page)
                    total_pages=Signal::derive(move || loader.total_pages(pagination.get().page_size))
                    total_count=loader.total_count
                    page_size=Signal::derive(move || pagination.get().page_size)
                    on_page_change=Callback::new(move |page| store.set_page(page))
                    on_page_size_change=Callback::new(move |size| store.set_page_size(size))
                    page_size_options=config.filters.page_size_options.clone()
                />
            </FilterPanel>

            {move || loader.error.get().map(|e| view! { <ErrorBanner detail=e /> })}

            <div class="page-content">
                <div style="width: 100%; overflow-x: auto;">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Asset" sort_field="asset_name" current_sort=current_sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Landmark" sort_field="landmark_name" current_sort=current_sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Idle since" sort_field="idle_since" current_sort=current_sort on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Idle days" sort_field="idle_days" current_sort=current_sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Battery %" sort_field="battery_pct" current_sort=current_sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Door open" sort_field="door_open" current_sort=current_sort on_sort=on_sort />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let rows = loader.rows.get();
                                if rows.is_empty() {
                                    let text = if loader.is_loading.get() { "Loading…" } else { "No data" };
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMNS.to_string()>
                                                <TableCellLayout>
                                                    <span class="text-muted">{text}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }

                                rows.into_iter()
                                    .map(|row| {
                                        let battery = row
                                            .battery_pct
                                            .map(|b| format_number(b, 0))
                                            .unwrap_or_else(|| "—".to_string());
                                        view! {
                                            <TableRow>
                                                <TableCell attr:title=row.asset_id.clone()><TableCellLayout truncate=true>{row.asset_name}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{or_dash(row.landmark_name.as_deref())}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_timestamp(&row.idle_since)}</TableCellLayout></TableCell>
                                                <TableCell class="table__cell--right"><TableCellLayout>{row.idle_days.to_string()}</TableCellLayout></TableCell>
                                                <TableCell class="table__cell--right"><TableCellLayout>{battery}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_flag(row.door_open)}</TableCellLayout></TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
