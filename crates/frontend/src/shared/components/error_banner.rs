use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching data";

fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::warn!("Page reload failed: {:?}", e);
        }
    }
}

/// Inline error for a failed table or tile fetch; retry reloads the page
#[component]
pub fn ErrorBanner(
    /// Technical detail shown under the message
    #[prop(optional, into)]
    detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="warning-box warning-box--error" role="alert">
            <span class="warning-box__icon">{icon("alert")}</span>
            <span class="warning-box__text">{FETCH_ERROR_MESSAGE}</span>
            {detail.map(|d| view! { <span class="warning-box__detail">{d}</span> })}
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| reload_page()
            >
                {icon("refresh")}
                " Reload"
            </Button>
        </div>
    }
}
