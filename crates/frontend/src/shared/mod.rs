pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod filter_state;
pub mod format;
pub mod icons;
pub mod list_loader;
pub mod option_resolver;
