use contracts::dashboards::d100_fleet_overview::dto::FleetOverviewResponse;

use crate::shared::api::{get_json, with_retry, ApiError};
use crate::shared::api_utils::api_url;

const OVERVIEW_PATH: &str = "/api/d100/overview";

/// One tile per view with the filters its drill-in applies
pub async fn get_fleet_overview(retries: u32) -> Result<FleetOverviewResponse, ApiError> {
    let url = api_url(OVERVIEW_PATH);
    let url = url.as_str();
    with_retry(retries, move || get_json(url, None)).await
}
