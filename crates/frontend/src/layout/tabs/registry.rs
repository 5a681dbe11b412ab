//! Maps a tab key to the view rendered inside it

use leptos::prelude::*;

use super::tab_labels::OVERVIEW_TAB;
use crate::dashboards::FleetOverviewDashboard;
use crate::projections::p101_yard_check::ui::list::YardCheckList;
use crate::projections::p102_idle_assets::ui::list::IdleAssetsList;
use crate::projections::p103_moving_assets::ui::list::MovingAssetsList;
use crate::projections::p104_accrued_distance::ui::list::AccruedDistanceList;
use crate::shared::filter_state::ViewKind;

pub fn render_tab_content(key: &str) -> AnyView {
    if key == OVERVIEW_TAB {
        return view! { <FleetOverviewDashboard /> }.into_any();
    }
    match ViewKind::from_name(key) {
        Some(ViewKind::YardCheck) => view! { <YardCheckList /> }.into_any(),
        Some(ViewKind::IdleAssets) => view! { <IdleAssetsList /> }.into_any(),
        Some(ViewKind::MovingAssets) => view! { <MovingAssetsList /> }.into_any(),
        Some(ViewKind::AccruedDistance) => view! { <AccruedDistanceList /> }.into_any(),
        None => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
