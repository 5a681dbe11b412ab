use super::registry::render_tab_content;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Content of one open tab. Stays mounted while other tabs are active so
/// scroll position and loaded rows survive switching.
#[component]
pub fn TabPage(#[prop(into)] tab_key: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key = tab_key.clone();
    let hidden = Memo::new(move |_| ctx.active.with(|active| active.as_deref() != Some(key.as_str())));

    log::debug!("mount tab {}", tab_key);
    let key = tab_key.clone();
    on_cleanup(move || log::debug!("unmount tab {}", key));

    view! {
        <div class="tabs__item" class:tabs__item--hidden=hidden data-tab-key=tab_key.clone()>
            {render_tab_content(&tab_key)}
        </div>
    }
}
