use serde::Deserialize;

use crate::shared::filter_state::store::DEFAULT_RECENT_CAP;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub filters: FiltersConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Filled from `FLEET_API_URL`
    #[serde(default)]
    pub base_url: String,
    /// Extra attempts for a failed data fetch
    pub fetch_retries: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FiltersConfig {
    pub recent_cap: usize,
    pub search_debounce_ms: u32,
    pub option_limit: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
fetch_retries = 1

[filters]
recent_cap = 5
search_debounce_ms = 400
option_limit = 50
page_size_options = [25, 50, 100, 200]
"#;

pub const ENV_API_URL: &str = "FLEET_API_URL";
pub const ENV_DEBOUNCE_MS: &str = "FLEET_SEARCH_DEBOUNCE_MS";
pub const ENV_RECENT_CAP: &str = "FLEET_RECENT_CAP";

/// Values baked in at build time; the browser has no process environment
fn build_env(name: &str) -> Option<String> {
    let value = match name {
        ENV_API_URL => option_env!("FLEET_API_URL"),
        ENV_DEBOUNCE_MS => option_env!("FLEET_SEARCH_DEBOUNCE_MS"),
        ENV_RECENT_CAP => option_env!("FLEET_RECENT_CAP"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Load the embedded defaults overlaid with build-time environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    from_sources(DEFAULT_CONFIG, build_env)
}

fn parse_env<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { name, value })
}

pub fn from_sources(
    toml_src: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = toml::from_str(toml_src)?;

    match env(ENV_API_URL) {
        Some(url) if !url.trim().is_empty() => config.api.base_url = url.trim().to_string(),
        _ => return Err(ConfigError::MissingEnv(ENV_API_URL)),
    }
    if let Some(v) = env(ENV_DEBOUNCE_MS) {
        config.filters.search_debounce_ms = parse_env(ENV_DEBOUNCE_MS, v)?;
    }
    if let Some(v) = env(ENV_RECENT_CAP) {
        config.filters.recent_cap = parse_env(ENV_RECENT_CAP, v)?;
    }
    if config.filters.page_size_options.is_empty() {
        config.filters.page_size_options = vec![50];
    }
    Ok(config)
}

impl FiltersConfig {
    pub fn recent_cap_or_default(&self) -> usize {
        if self.recent_cap == 0 {
            DEFAULT_RECENT_CAP
        } else {
            self.recent_cap
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config_loads() {
        let config = from_sources(DEFAULT_CONFIG, env(&[(ENV_API_URL, "https://fleet.example.com")])).unwrap();
        assert_eq!(config.api.base_url, "https://fleet.example.com");
        assert_eq!(config.api.fetch_retries, 1);
        assert_eq!(config.filters.recent_cap, 5);
        assert_eq!(config.filters.search_debounce_ms, 400);
        assert_eq!(config.filters.page_size_options, vec![25, 50, 100, 200]);
    }

    #[test]
    fn test_missing_api_url_fails() {
        let err = from_sources(DEFAULT_CONFIG, env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(ENV_API_URL)));
        let err = from_sources(DEFAULT_CONFIG, env(&[(ENV_API_URL, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = from_sources(
            DEFAULT_CONFIG,
            env(&[
                (ENV_API_URL, "http://localhost:3000"),
                (ENV_DEBOUNCE_MS, "250"),
                (ENV_RECENT_CAP, "8"),
            ]),
        )
        .unwrap();
        assert_eq!(config.filters.search_debounce_ms, 250);
        assert_eq!(config.filters.recent_cap, 8);
    }

    #[test]
    fn test_invalid_env_value() {
        let err = from_sources(
            DEFAULT_CONFIG,
            env(&[(ENV_API_URL, "http://localhost:3000"), (ENV_DEBOUNCE_MS, "soon")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name: ENV_DEBOUNCE_MS, .. }));
    }
}
