//! API utilities for frontend-backend communication
//!
//! The base URL comes from `AppConfig` and is installed once at startup.

use once_cell::sync::OnceCell;

static API_BASE: OnceCell<String> = OnceCell::new();

/// Install the configured base URL; later calls are ignored
pub fn init_api_base(base: &str) {
    if API_BASE.set(base.trim_end_matches('/').to_string()).is_err() {
        log::warn!("API base already initialised");
    }
}

/// Get the base URL for API requests
///
/// Falls back to the current window location on port 3000 when no base
/// was installed.
pub fn api_base() -> String {
    if let Some(base) = API_BASE.get() {
        return base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/idle-assets/list");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
