//! Seismic fault traces and flood-risk zones.
//!
//! Static geometry carried in the dataset for the map boundary to overlay.
//! The core computes nothing over these shapes.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::geo::GeoPoint;

/// A mapped fault line as an ordered polyline of vertices.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaultLine {
    pub id: String,
    pub name: String,
    #[validate(nested, length(min = 2))]
    pub trace: Vec<GeoPoint>,
}

/// A flood-risk area as a closed polygon perimeter.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FloodZone {
    pub id: String,
    pub name: String,
    #[validate(nested, length(min = 3))]
    pub perimeter: Vec<GeoPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_needs_two_vertices() {
        let fault = FaultLine {
            id: "sagaing".to_string(),
            name: "Sagaing Fault".to_string(),
            trace: vec![GeoPoint { lat: 26.0, lng: 96.3 }],
        };
        assert!(fault.validate().is_err());
    }

    #[test]
    fn test_perimeter_needs_three_vertices() {
        let zone = FloodZone {
            id: "delta".to_string(),
            name: "Ayeyarwady Delta Floodplain".to_string(),
            perimeter: vec![
                GeoPoint { lat: 17.6, lng: 95.0 },
                GeoPoint { lat: 17.3, lng: 96.0 },
            ],
        };
        assert!(zone.validate().is_err());
    }

    #[test]
    fn test_vertex_coordinates_are_checked() {
        let fault = FaultLine {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            trace: vec![
                GeoPoint { lat: 26.0, lng: 96.3 },
                GeoPoint { lat: 200.0, lng: 96.0 },
            ],
        };
        assert!(fault.validate().is_err());
    }
}
