use serde::{Deserialize, Serialize};

use crate::domain::a101_asset::dto::AssetType;

/// Row of the Yard Check report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YardCheckRowDto {
    pub asset_id: String,
    pub asset_name: String,
    pub asset_type: AssetType,
    pub landmark_name: Option<String>,
    pub country_code: Option<String>,
    /// ISO 8601
    pub last_checked_at: Option<String>,
    /// Asset was seen inside the landmark during the last check
    pub present: bool,
}
