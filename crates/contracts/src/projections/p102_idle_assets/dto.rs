use serde::{Deserialize, Serialize};

/// Row of the idle assets list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdleAssetRowDto {
    pub asset_id: String,
    pub asset_name: String,
    pub landmark_name: Option<String>,
    /// ISO 8601
    pub idle_since: String,
    pub idle_days: u32,
    pub battery_pct: Option<f64>,
    pub door_open: Option<bool>,
}
