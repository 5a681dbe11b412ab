pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Header across the top, collapsible navigation on the left and the tab
/// area filling the rest.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let left_hidden = move || !ctx.left_open.get();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside data-zone="left" class="app-sidebar" class:hidden=left_hidden>
                    {left()}
                </aside>
                <main data-zone="center" class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
