use contracts::shared::filters::{OptionListResponse, OptionQuery, TaggedId};
use web_sys::AbortSignal;

use crate::shared::api::{get_json, ApiError};
use crate::shared::api_utils::api_url;

pub const ASSET_OPTIONS: &str = "/api/assets/options";
pub const LANDMARK_OPTIONS: &str = "/api/landmarks/options";
pub const COUNTRY_OPTIONS: &str = "/api/countries/options";

/// Where a multi-select takes its options from
#[derive(Debug, Clone, PartialEq)]
pub enum OptionSource {
    /// Fixed list, filtered locally
    Static(Vec<TaggedId>),
    /// Endpoint answering `?q=&limit=` with an `OptionListResponse`
    Remote(String),
}

impl OptionSource {
    pub fn remote(path: &str) -> Self {
        OptionSource::Remote(path.to_string())
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, OptionSource::Remote(_))
    }
}

/// Case-insensitive label match, empty query returns everything
pub fn filter_static(options: &[TaggedId], query: &str) -> Vec<TaggedId> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

pub async fn fetch_options(
    endpoint: &str,
    query: &str,
    limit: usize,
    signal: Option<&AbortSignal>,
) -> Result<Vec<TaggedId>, ApiError> {
    let params = OptionQuery {
        q: query.trim().to_string(),
        limit: Some(limit),
    };
    let qs = serde_qs::to_string(&params).map_err(|e| ApiError::Encode(e.to_string()))?;
    let url = format!("{}?{}", api_url(endpoint), qs);
    let response: OptionListResponse = get_json(&url, signal).await?;
    Ok(response.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_static_case_insensitive() {
        let options = vec![
            TaggedId::new("reefer", "Reefer"),
            TaggedId::new("dry_van", "Dry van"),
            TaggedId::new("flatbed", "Flatbed"),
        ];
        let found = filter_static(&options, "  REE ");
        assert_eq!(found, vec![TaggedId::new("reefer", "Reefer")]);
        assert_eq!(filter_static(&options, "").len(), 3);
        assert!(filter_static(&options, "tank").is_empty());
    }
}
