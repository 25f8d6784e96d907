use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::SitingResult;

/// Nameplate capacity of the reference SMR unit in megawatts.
pub const SMR_CAPACITY_MW: f64 = 300.0;

/// Daily generation target in MWh (300 MW over 24 hours).
pub const DAILY_GENERATION_TARGET_MWH: f64 = 7200.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub generation: GenerationConfig,
    pub grid: GridConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub capacity_mw: f64,
    pub hours_per_day: f64,
}

impl GenerationConfig {
    /// Daily generation target implied by the configured unit.
    pub fn daily_target_mwh(&self) -> f64 {
        self.capacity_mw * self.hours_per_day
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Load center every delivery estimate routes to.
    pub hub_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig {
                capacity_mw: SMR_CAPACITY_MW,
                hours_per_day: 24.0,
            },
            grid: GridConfig {
                hub_id: "yangon".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load() -> SitingResult<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("SMR__").split("__"));
        Ok(figment.extract()?)
    }
}
