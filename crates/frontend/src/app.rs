use std::sync::Arc;

use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::OVERVIEW_TAB;
use crate::layout::tabs::tab_label_for_key;
use crate::projections::view_schemas;
use crate::shared::config::AppConfig;
use crate::shared::filter_state::persistence::LocalStorage;
use crate::shared::filter_state::ViewStores;
use crate::system::auth::current_user_id;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let user_id = current_user_id();
    log::debug!("Opening filter stores for {}", user_id);

    // Stores live for the whole application, independent of open tabs.
    let stores = ViewStores::open(
        view_schemas(),
        &user_id,
        Arc::new(LocalStorage),
        config.filters.recent_cap_or_default(),
    );

    let ctx = AppGlobalContext::new();
    ctx.open_tab(OVERVIEW_TAB, tab_label_for_key(OVERVIEW_TAB));

    provide_context(config);
    provide_context(stores);
    provide_context(ctx);

    view! {
        <MainLayout />
    }
}
