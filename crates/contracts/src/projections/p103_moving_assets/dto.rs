use serde::{Deserialize, Serialize};

/// Row of the moving assets list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingAssetRowDto {
    pub asset_id: String,
    pub asset_name: String,
    pub country_code: Option<String>,
    pub speed_kph: f64,
    pub heading_deg: Option<f64>,
    pub loaded: Option<bool>,
    /// ISO 8601
    pub moving_since: String,
}
