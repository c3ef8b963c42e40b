//! Projection configuration (the live settings the UI edits)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::constants::projection;
use crate::config::{GrowthPct, UsdPrice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default)]
pub enum PriceMode {
    /// Growth-curve projection seeded from the current spot price.
    #[strum(to_string = "Projected")]
    #[default]
    Projected,
    /// Replay actual monthly closes from a chosen start year.
    #[strum(to_string = "Historical")]
    Historical,
}

/// The Master Projection Configuration.
/// Owned by the engine; a copy travels with every job request so an in-flight
/// job is never affected by later edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSettings {
    pub mode: PriceMode,

    /// Projection horizon in months.
    pub horizon_months: u32,

    /// Annual growth assumption (Projected mode only).
    pub annual_growth: GrowthPct,

    /// Start year for Historical mode.
    pub historical_start_year: i32,

    /// Manual spot price override. None = use the live stream.
    pub manual_spot_price: Option<UsdPrice>,

    /// Live price drift (fractional) that re-triggers projection.
    pub price_recalc_threshold_pct: f64,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        PROJECTION.clone()
    }
}

impl ProjectionSettings {
    pub fn clamp_horizon(&mut self) {
        self.horizon_months = self
            .horizon_months
            .clamp(projection::MIN_HORIZON_MONTHS, projection::MAX_HORIZON_MONTHS);
    }
}

pub const PROJECTION: ProjectionSettings = ProjectionSettings {
    mode: PriceMode::Projected,
    horizon_months: projection::DEFAULT_HORIZON_MONTHS,
    annual_growth: GrowthPct::new(projection::DEFAULT_ANNUAL_GROWTH),
    historical_start_year: 2020,
    manual_spot_price: None,
    price_recalc_threshold_pct: projection::PRICE_RECALC_THRESHOLD_PCT,
};
