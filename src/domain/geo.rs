//! Geographic primitives.
//!
//! Coordinates are WGS84 decimal degrees; distances are great-circle
//! kilometers on a spherical Earth.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::error::SitingResult;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
///
/// Invariant: `lat` ∈ [-90, 90], `lng` ∈ [-180, 180]. Records deserialized
/// from the dataset are checked at load time; dynamically supplied points
/// are checked at the estimator boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point, rejecting coordinates outside the valid range.
    pub fn new(lat: f64, lng: f64) -> SitingResult<Self> {
        let point = Self { lat, lng };
        point.validate()?;
        Ok(point)
    }

    /// Great-circle distance to another point in kilometers.
    ///
    /// Haversine formula with R = 6371 km. Symmetric, and zero (within
    /// floating tolerance) iff the points coincide.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let h = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        // Rounding can push h past 1 for near-antipodal pairs.
        2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).max(0.0).sqrt())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}
