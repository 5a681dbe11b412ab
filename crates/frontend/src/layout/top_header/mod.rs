use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let nav_title = move || {
        if ctx.left_open.get() {
            "Hide navigation"
        } else {
            "Show navigation"
        }
    };

    view! {
        <header class="top-header">
            <button class="top-header__icon-btn" title=nav_title on:click=move |_| ctx.toggle_left()>
                {icon("panel-left")}
            </button>
            <span class="top-header__title">"Fleet Tracking"</span>
        </header>
    }
}
