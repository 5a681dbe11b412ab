use serde::{Deserialize, Serialize};

use crate::shared::filters::FilterSet;

/// Response of `GET /api/d100/overview`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetOverviewResponse {
    pub tiles: Vec<OverviewTileDto>,
}

/// Dashboard tile with a drill-in target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewTileDto {
    pub id: String,
    pub title: String,
    pub value: f64,
    /// View name the tile opens, e.g. "idle-assets"
    pub target_view: String,
    /// Filters applied to the target view on drill-in
    #[serde(default)]
    pub drilldown_filters: FilterSet,
}
