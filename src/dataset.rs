//! Embedded siting dataset.
//!
//! The candidate sites, load centers, and hazard geometry ship with the
//! crate as a versioned TOML document. The document is parsed and validated
//! once; the primary hub is resolved at load time and never looked up again.

use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use crate::domain::{CandidateSite, FaultLine, FloodZone, LoadCenter};
use crate::error::{SitingError, SitingResult};

const BUNDLED_TOML: &str = include_str!("../data/myanmar.toml");

static BUNDLED: Lazy<Dataset> =
    Lazy::new(|| Dataset::from_toml(BUNDLED_TOML).expect("bundled dataset is valid"));

/// On-disk layout of the dataset document.
#[derive(Debug, Deserialize)]
struct RawDataset {
    version: u32,
    hub_id: String,
    #[serde(rename = "site", default)]
    sites: Vec<CandidateSite>,
    #[serde(rename = "load_center", default)]
    load_centers: Vec<LoadCenter>,
    #[serde(rename = "fault_line", default)]
    fault_lines: Vec<FaultLine>,
    #[serde(rename = "flood_zone", default)]
    flood_zones: Vec<FloodZone>,
}

/// The validated siting dataset with the primary hub resolved.
#[derive(Debug, Clone)]
pub struct Dataset {
    version: u32,
    sites: Vec<CandidateSite>,
    load_centers: Vec<LoadCenter>,
    fault_lines: Vec<FaultLine>,
    flood_zones: Vec<FloodZone>,
    hub_index: usize,
}

impl Dataset {
    /// The dataset bundled with the crate.
    ///
    /// The embedded document is validated by the test suite, so the first
    /// access cannot fail at runtime.
    pub fn bundled() -> &'static Dataset {
        &BUNDLED
    }

    /// Parse and validate a dataset document.
    pub fn from_toml(document: &str) -> SitingResult<Dataset> {
        let raw: RawDataset = toml::from_str(document)?;

        for site in &raw.sites {
            site.validate()
                .map_err(|e| SitingError::Dataset(format!("site '{}': {e}", site.id)))?;
        }
        for center in &raw.load_centers {
            center
                .validate()
                .map_err(|e| SitingError::Dataset(format!("load center '{}': {e}", center.id)))?;
        }
        for fault in &raw.fault_lines {
            fault
                .validate()
                .map_err(|e| SitingError::Dataset(format!("fault line '{}': {e}", fault.id)))?;
        }
        for zone in &raw.flood_zones {
            zone.validate()
                .map_err(|e| SitingError::Dataset(format!("flood zone '{}': {e}", zone.id)))?;
        }

        if let Some(dup) = raw.sites.iter().map(|s| s.id.as_str()).duplicates().next() {
            return Err(SitingError::Dataset(format!("duplicate site id '{dup}'")));
        }
        if let Some(dup) = raw
            .load_centers
            .iter()
            .map(|c| c.id.as_str())
            .duplicates()
            .next()
        {
            return Err(SitingError::Dataset(format!(
                "duplicate load center id '{dup}'"
            )));
        }

        let hub_index = raw
            .load_centers
            .iter()
            .position(|c| c.id == raw.hub_id)
            .ok_or_else(|| SitingError::MissingHub(raw.hub_id.clone()))?;

        debug!(
            version = raw.version,
            sites = raw.sites.len(),
            load_centers = raw.load_centers.len(),
            hub = %raw.hub_id,
            "siting dataset loaded"
        );

        Ok(Dataset {
            version: raw.version,
            sites: raw.sites,
            load_centers: raw.load_centers,
            fault_lines: raw.fault_lines,
            flood_zones: raw.flood_zones,
            hub_index,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn sites(&self) -> &[CandidateSite] {
        &self.sites
    }

    pub fn load_centers(&self) -> &[LoadCenter] {
        &self.load_centers
    }

    /// Load centers ordered by priority rank, highest (1) first.
    pub fn load_centers_by_priority(&self) -> Vec<&LoadCenter> {
        self.load_centers
            .iter()
            .sorted_by_key(|c| c.priority)
            .collect()
    }

    pub fn fault_lines(&self) -> &[FaultLine] {
        &self.fault_lines
    }

    pub fn flood_zones(&self) -> &[FloodZone] {
        &self.flood_zones
    }

    /// The load center all delivery estimates route to by default.
    pub fn primary_hub(&self) -> &LoadCenter {
        &self.load_centers[self.hub_index]
    }

    /// Look up a candidate site by id.
    pub fn site(&self, id: &str) -> SitingResult<&CandidateSite> {
        self.sites
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| SitingError::UnknownSite(id.to_string()))
    }

    /// Look up a load center by id.
    pub fn load_center(&self, id: &str) -> SitingResult<&LoadCenter> {
        self.load_centers
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| SitingError::UnknownLoadCenter(id.to_string()))
    }
}
