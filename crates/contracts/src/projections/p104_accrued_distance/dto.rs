use serde::{Deserialize, Serialize};

/// Distance an asset accrued over the period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccruedDistanceRowDto {
    pub asset_id: String,
    pub asset_name: String,
    pub distance_km: f64,
    pub trips: u32,
    /// YYYY-MM-DD
    pub period_from: String,
    /// YYYY-MM-DD
    pub period_to: String,
}

pub const KM_PER_MILE: f64 = 1.609_344;

/// Distance unit selected in the display filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Mi,
}

impl DistanceUnit {
    pub fn from_code(code: &str) -> Self {
        match code {
            "mi" => DistanceUnit::Mi,
            _ => DistanceUnit::Km,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Mi => "mi",
        }
    }

    pub fn convert_km(&self, km: f64) -> f64 {
        match self {
            DistanceUnit::Km => km,
            DistanceUnit::Mi => km / KM_PER_MILE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_km() {
        assert_eq!(DistanceUnit::Km.convert_km(10.0), 10.0);
        let mi = DistanceUnit::Mi.convert_km(KM_PER_MILE * 3.0);
        assert!((mi - 3.0).abs() < 1e-9);
        assert_eq!(DistanceUnit::from_code("unknown"), DistanceUnit::Km);
    }
}
