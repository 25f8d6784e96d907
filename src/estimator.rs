//! Power delivery estimation.
//!
//! The computational core of the dashboard: great-circle distance from a
//! candidate site to the primary demand hub, a distance-derived transmission
//! efficiency, and the split of one day of SMR output into delivered,
//! absorbed, and surplus energy. Everything here is a pure function of its
//! inputs; estimates are recomputed per call and never cached.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use validator::Validate;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::domain::{CandidateSite, LoadCenter};
use crate::error::{SitingError, SitingResult};

/// T&D loss floor in percent, charged at any distance.
const BASE_LOSS_PERCENT: f64 = 5.0;
/// Distance-dependent loss in percent per 1000 km of line.
const DISTANCE_LOSS_PER_1000_KM: f64 = 3.0;
/// Cap on the distance-dependent loss component in percent.
const MAX_DISTANCE_LOSS_PERCENT: f64 = 3.0;
/// Cap on total T&D loss in percent.
const MAX_TOTAL_LOSS_PERCENT: f64 = 8.0;
/// Efficiency floor in percent. Coincides with the loss cap today; both
/// bounds are applied independently.
const MIN_EFFICIENCY_PERCENT: f64 = 92.0;

/// Transmission & distribution efficiency over a line of the given length.
///
/// Base loss of 5% plus 3% per 1000 km (capped at 3%), total loss capped at
/// 8%. Non-increasing in distance; 95 at 0 km, exactly 92 from 1000 km on.
pub fn transmission_efficiency_percent(distance_km: f64) -> f64 {
    let distance_loss =
        (distance_km / 1000.0 * DISTANCE_LOSS_PER_1000_KM).min(MAX_DISTANCE_LOSS_PERCENT);
    let total_loss = (BASE_LOSS_PERCENT + distance_loss).min(MAX_TOTAL_LOSS_PERCENT);
    (100.0 - total_loss).max(MIN_EFFICIENCY_PERCENT)
}

/// Result of routing one day of SMR output to a demand hub.
///
/// All fields are unrounded; display rounding happens only in
/// [`DeliveryEstimate::summary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryEstimate {
    /// Great-circle site-to-hub distance in km.
    pub distance_km: f64,
    /// T&D efficiency over that distance in percent.
    pub efficiency_percent: f64,
    /// Energy arriving at the hub in MWh/day.
    pub delivered_mwh: f64,
    /// Portion of the delivered energy the hub absorbs, capped by its demand.
    pub absorbed_mwh: f64,
    /// Delivered energy beyond the hub demand, left for onward routing.
    pub surplus_mwh: f64,
}

impl DeliveryEstimate {
    /// Round for presentation: distance and energies to the nearest unit,
    /// efficiency to one decimal. Never feed these values back into
    /// arithmetic.
    pub fn summary(&self) -> DeliverySummary {
        DeliverySummary {
            distance_km: self.distance_km.round() as i64,
            efficiency_percent: (self.efficiency_percent * 10.0).round() / 10.0,
            delivered_mwh: self.delivered_mwh.round() as i64,
            absorbed_mwh: self.absorbed_mwh.round() as i64,
            surplus_mwh: self.surplus_mwh.round() as i64,
        }
    }
}

/// Display-rounded form of a [`DeliveryEstimate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliverySummary {
    pub distance_km: i64,
    pub efficiency_percent: f64,
    pub delivered_mwh: i64,
    pub absorbed_mwh: i64,
    pub surplus_mwh: i64,
}

impl fmt::Display for DeliverySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} km at {:.1}%: {} MWh delivered, {} absorbed, {} surplus",
            self.distance_km,
            self.efficiency_percent,
            self.delivered_mwh,
            self.absorbed_mwh,
            self.surplus_mwh
        )
    }
}

/// Estimate one day of delivery from `site` to `hub`.
///
/// Inputs are validated before any arithmetic: an out-of-range coordinate,
/// a negative demand, or a non-finite or negative generation figure is
/// rejected with [`SitingError::InvalidInput`].
pub fn estimate_delivery(
    site: &CandidateSite,
    hub: &LoadCenter,
    daily_generation_mwh: f64,
) -> SitingResult<DeliveryEstimate> {
    site.validate()?;
    hub.validate()?;
    if !daily_generation_mwh.is_finite() || daily_generation_mwh < 0.0 {
        return Err(SitingError::InvalidInput(format!(
            "daily generation must be a non-negative figure, got {daily_generation_mwh}"
        )));
    }

    let distance_km = site.location.distance_km(&hub.location);
    let efficiency_percent = transmission_efficiency_percent(distance_km);
    let delivered_mwh = daily_generation_mwh * efficiency_percent / 100.0;
    let absorbed_mwh = delivered_mwh.min(hub.demand_mwh);
    let surplus_mwh = (delivered_mwh - hub.demand_mwh).max(0.0);

    Ok(DeliveryEstimate {
        distance_km,
        efficiency_percent,
        delivered_mwh,
        absorbed_mwh,
        surplus_mwh,
    })
}

/// Binds the resolved demand hub and the configured generation target so
/// call sites estimate against a fixed destination.
#[derive(Debug, Clone)]
pub struct DeliveryPlanner<'a> {
    dataset: &'a Dataset,
    hub: &'a LoadCenter,
    daily_generation_mwh: f64,
}

impl<'a> DeliveryPlanner<'a> {
    /// Resolve the hub named by the configuration against the dataset.
    pub fn new(dataset: &'a Dataset, config: &Config) -> SitingResult<Self> {
        let hub = dataset.load_center(&config.grid.hub_id)?;
        Ok(Self {
            dataset,
            hub,
            daily_generation_mwh: config.generation.daily_target_mwh(),
        })
    }

    /// The hub every estimate routes to.
    pub fn hub(&self) -> &LoadCenter {
        self.hub
    }

    /// Estimate delivery from a candidate site to the hub.
    pub fn estimate(&self, site: &CandidateSite) -> SitingResult<DeliveryEstimate> {
        let estimate = estimate_delivery(site, self.hub, self.daily_generation_mwh)?;
        debug!(
            site = %site.id,
            hub = %self.hub.id,
            distance_km = estimate.distance_km,
            efficiency_percent = estimate.efficiency_percent,
            "delivery estimated"
        );
        Ok(estimate)
    }

    /// Estimate for a site looked up by id in the dataset.
    pub fn estimate_by_id(&self, site_id: &str) -> SitingResult<DeliveryEstimate> {
        let site = self.dataset.site(site_id)?;
        self.estimate(site)
    }
}
