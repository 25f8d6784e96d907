//! Candidate reactor sites (supply side).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

use super::geo::GeoPoint;

/// Seismic hazard category assigned to a candidate site.
///
/// Ordered from least to most hazardous.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
pub enum SeismicRisk {
    Low,
    Moderate,
    #[serde(rename = "Moderate-High")]
    #[strum(serialize = "Moderate-High")]
    ModerateHigh,
    High,
}

/// Qualitative classification of the 1-10 water availability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum WaterLevel {
    Excellent, // score >= 9
    Good,      // score >= 7
    Moderate,  // score >= 5
    Limited,   // score < 5
}

impl WaterLevel {
    /// Classify a 1-10 water availability score.
    pub fn from_score(score: u8) -> Self {
        if score >= 9 {
            WaterLevel::Excellent
        } else if score >= 7 {
            WaterLevel::Good
        } else if score >= 5 {
            WaterLevel::Moderate
        } else {
            WaterLevel::Limited
        }
    }
}

/// A narrative siting advantage attached to a candidate site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicFactor {
    pub title: String,
    pub description: String,
}

/// A candidate SMR site. Static record, immutable after dataset load.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateSite {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub location: GeoPoint,
    /// Cooling-water availability on a 1-10 scale.
    #[validate(range(min = 1, max = 10))]
    pub water: u8,
    pub seismic: SeismicRisk,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partnership: Option<String>,
    pub description: String,
    #[serde(default)]
    pub is_preferred: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub economic_factors: Vec<EconomicFactor>,
}

impl CandidateSite {
    /// Qualitative water availability for this site.
    pub fn water_level(&self) -> WaterLevel {
        WaterLevel::from_score(self.water)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_water_level_thresholds() {
        assert_eq!(WaterLevel::from_score(10), WaterLevel::Excellent);
        assert_eq!(WaterLevel::from_score(9), WaterLevel::Excellent);
        assert_eq!(WaterLevel::from_score(8), WaterLevel::Good);
        assert_eq!(WaterLevel::from_score(7), WaterLevel::Good);
        assert_eq!(WaterLevel::from_score(6), WaterLevel::Moderate);
        assert_eq!(WaterLevel::from_score(5), WaterLevel::Moderate);
        assert_eq!(WaterLevel::from_score(4), WaterLevel::Limited);
        assert_eq!(WaterLevel::from_score(1), WaterLevel::Limited);
    }

    #[test]
    fn test_seismic_risk_ordering() {
        assert!(SeismicRisk::Low < SeismicRisk::Moderate);
        assert!(SeismicRisk::Moderate < SeismicRisk::ModerateHigh);
        assert!(SeismicRisk::ModerateHigh < SeismicRisk::High);
    }

    #[test]
    fn test_seismic_risk_parsing() {
        assert_eq!(
            SeismicRisk::from_str("Moderate-High").unwrap(),
            SeismicRisk::ModerateHigh
        );
        assert_eq!(SeismicRisk::from_str("Low").unwrap(), SeismicRisk::Low);
        assert!(SeismicRisk::from_str("Extreme").is_err());
    }

    #[test]
    fn test_seismic_risk_display() {
        assert_eq!(SeismicRisk::ModerateHigh.to_string(), "Moderate-High");
        assert_eq!(SeismicRisk::High.to_string(), "High");
    }

    #[test]
    fn test_site_serialization() {
        let site = CandidateSite {
            id: "dawei".to_string(),
            name: "Dawei".to_string(),
            location: GeoPoint { lat: 14.08, lng: 98.20 },
            water: 10,
            seismic: SeismicRisk::Low,
            partnership: Some("Russia-Myanmar G2G".to_string()),
            description: "Strategic SEZ & Deep Sea Port.".to_string(),
            is_preferred: true,
            economic_factors: vec![],
        };

        let json = serde_json::to_string(&site).unwrap();
        let back: CandidateSite = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, site.id);
        assert_eq!(back.seismic, SeismicRisk::Low);
        assert_eq!(back.location, site.location);
        assert!(json.contains("\"lat\":14.08"));
    }

    #[test]
    fn test_site_validation() {
        let mut site = CandidateSite {
            id: "test".to_string(),
            name: "Test".to_string(),
            location: GeoPoint { lat: 0.0, lng: 0.0 },
            water: 5,
            seismic: SeismicRisk::Moderate,
            partnership: None,
            description: String::new(),
            is_preferred: false,
            economic_factors: vec![],
        };
        assert!(site.validate().is_ok());

        site.water = 11;
        assert!(site.validate().is_err());

        site.water = 5;
        site.location.lat = 123.0;
        assert!(site.validate().is_err());
    }
}
