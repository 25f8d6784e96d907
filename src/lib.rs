//! SMR siting core for the Myanmar grid.
//!
//! Candidate reactor sites, demand centers, and hazard geometry ship as an
//! embedded validated dataset; the power delivery estimator routes one day
//! of SMR output from a chosen site to the primary demand hub and reports
//! delivered, absorbed, and surplus energy. The map dashboard consuming
//! this crate is a separate presentation layer.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod estimator;
pub mod telemetry;

pub use config::{Config, DAILY_GENERATION_TARGET_MWH, SMR_CAPACITY_MW};
pub use dataset::Dataset;
pub use domain::{
    CandidateSite, EconomicFactor, FaultLine, FloodZone, GeoPoint, LoadCenter, SeismicRisk,
    WaterLevel,
};
pub use error::{SitingError, SitingResult};
pub use estimator::{
    estimate_delivery, transmission_efficiency_percent, DeliveryEstimate, DeliveryPlanner,
    DeliverySummary,
};
