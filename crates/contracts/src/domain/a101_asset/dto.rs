use serde::{Deserialize, Serialize};

use crate::shared::filters::TaggedId;

/// Trailer or container type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    DryVan,
    Reefer,
    Flatbed,
    Container,
    Chassis,
}

impl AssetType {
    pub const ALL: [AssetType; 5] = [
        AssetType::DryVan,
        AssetType::Reefer,
        AssetType::Flatbed,
        AssetType::Container,
        AssetType::Chassis,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AssetType::DryVan => "dry_van",
            AssetType::Reefer => "reefer",
            AssetType::Flatbed => "flatbed",
            AssetType::Container => "container",
            AssetType::Chassis => "chassis",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetType::DryVan => "Dry van",
            AssetType::Reefer => "Reefer",
            AssetType::Flatbed => "Flatbed",
            AssetType::Container => "Container",
            AssetType::Chassis => "Chassis",
        }
    }

    /// Static option list for the asset type select
    pub fn options() -> Vec<TaggedId> {
        AssetType::ALL
            .iter()
            .map(|t| TaggedId::new(t.code(), t.label()))
            .collect()
    }
}
