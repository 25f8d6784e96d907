//! Demand-side load centers.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::geo::GeoPoint;

/// A demand center on the national grid. Static record, immutable after
/// dataset load.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoadCenter {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub location: GeoPoint,
    /// Daily energy demand in MWh.
    #[validate(range(min = 0.0))]
    pub demand_mwh: f64,
    /// Rank among load centers; 1 is the highest priority.
    #[validate(range(min = 1))]
    pub priority: u32,
}

impl LoadCenter {
    /// Whether this center carries the top priority rank.
    pub fn is_primary(&self) -> bool {
        self.priority == 1
    }
}
