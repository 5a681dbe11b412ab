use contracts::dashboards::d100_fleet_overview::dto::OverviewTileDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_fleet_overview::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::config::AppConfig;
use crate::shared::filter_state::{ViewKind, ViewStores};
use crate::shared::format::format_number;
use crate::shared::icons::icon;

fn tile_icon(kind: Option<ViewKind>) -> &'static str {
    match kind {
        Some(ViewKind::YardCheck) => "yard",
        Some(ViewKind::IdleAssets) => "idle",
        Some(ViewKind::MovingAssets) => "moving",
        Some(ViewKind::AccruedDistance) => "distance",
        None => "dashboard",
    }
}

/// View opened by a tile, `None` for unknown targets
pub fn drill_target(tile: &OverviewTileDto) -> Option<ViewKind> {
    ViewKind::from_name(&tile.target_view)
}

#[component]
pub fn FleetOverviewDashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let stores = use_context::<ViewStores>().expect("ViewStores context not found");
    let retries = config.api.fetch_retries;

    let (tiles, set_tiles) = signal(Vec::<OverviewTileDto>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_fleet_overview(retries).await {
                Ok(response) => set_tiles.set(response.tiles),
                Err(e) => {
                    log::error!("Failed to load fleet overview: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let drill_in = move |tile: OverviewTileDto| {
        let Some(kind) = drill_target(&tile) else {
            log::warn!("Tile {} targets unknown view {}", tile.id, tile.target_view);
            return;
        };
        match stores.get(kind) {
            Some(store) => {
                store.apply_drill_in(&tile.drilldown_filters);
                ctx.open_view(kind);
            }
            None => log::warn!("No store registered for {}", kind.name()),
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("dashboard")}
                    <h1 class="page__title">"Fleet overview"</h1>
                </div>
                <div class="page__header-right">
                    <span class="text-muted">
                        {move || if loading.get() { "Loading…" } else { "" }}
                    </span>
                </div>
            </div>

            {move || error.get().map(|e| view! { <ErrorBanner detail=e /> })}

            <div class="overview-grid">
                <For
                    each=move || tiles.get()
                    key=|tile| tile.id.clone()
                    children=move |tile| {
                        let kind = drill_target(&tile);
                        let title = tile.title.clone();
                        let value = format_number(tile.value, 0);
                        let hint = kind.map(|k| k.title()).unwrap_or_default();
                        let drill_in = drill_in.clone();
                        view! {
                            <div
                                class="stat-card stat-card--clickable"
                                class:stat-card--disabled=kind.is_none()
                                on:click=move |_| drill_in(tile.clone())
                            >
                                <div class="stat-card__header">
                                    {icon(tile_icon(kind))}
                                    <span class="stat-card__label">{title}</span>
                                </div>
                                <div class="stat-card__value">{value}</div>
                                <div class="stat-card__hint">{hint}</div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filters::FilterSet;

    fn tile(target: &str) -> OverviewTileDto {
        OverviewTileDto {
            id: "t1".into(),
            title: "Idle > 7 days".into(),
            value: 12.0,
            target_view: target.into(),
            drilldown_filters: FilterSet::new(),
        }
    }

    #[test]
    fn test_drill_target_by_view_name() {
        assert_eq!(drill_target(&tile("idle-assets")), Some(ViewKind::IdleAssets));
        assert_eq!(drill_target(&tile("yard-check")), Some(ViewKind::YardCheck));
        assert_eq!(drill_target(&tile("unknown")), None);
    }
}
