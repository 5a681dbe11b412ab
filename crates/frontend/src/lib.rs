pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod layout;
pub mod projections;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::api_utils::init_api_base;
use crate::shared::config::load_config;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            let message = e.to_string();
            leptos::mount::mount_to_body(move || {
                view! {
                    <div class="config-error">
                        <h2>"Configuration error"</h2>
                        <p>{message.clone()}</p>
                    </div>
                }
            });
            return;
        }
    };
    init_api_base(&config.api.base_url);

    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
