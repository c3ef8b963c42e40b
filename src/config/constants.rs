use crate::utils::TimeUtils;

// Top Level Constants
pub const SYMBOL: &str = "BTCUSDT";
pub const MONTHS_PER_YEAR: u32 = 12;

/// Candle interval for historical price fetches. Monthly closes are all the
/// projection ever consumes.
pub const HISTORY_INTERVAL_MS: i64 = TimeUtils::MS_IN_1_MO;

pub mod projection {
    /// Default projection horizon (10 years of vesting).
    pub const DEFAULT_HORIZON_MONTHS: u32 = 120;
    pub const MIN_HORIZON_MONTHS: u32 = 12;
    pub const MAX_HORIZON_MONTHS: u32 = 240;

    /// Default annual growth assumption for projected mode.
    pub const DEFAULT_ANNUAL_GROWTH: f64 = 0.30;

    /// Earliest selectable start year for historical mode. Exchange data
    /// before this is too sparse to chart honestly.
    pub const HISTORICAL_MIN_YEAR: i32 = 2015;

    /// Fallback spot price when neither the live stream nor the cache can
    /// supply one (manual-override starting point).
    pub const FALLBACK_SPOT_PRICE: f64 = 100_000.0;

    /// Live price drift (fractional) that re-triggers projection.
    pub const PRICE_RECALC_THRESHOLD_PCT: f64 = 0.005;
}

pub mod unlock {
    /// The default unlock schedule shared by all preset schemes:
    /// 50% at the 5-year mark, 100% at the 10-year mark.
    pub const DEFAULT_STEPS: &[(u32, f64)] = &[(60, 50.0), (120, 100.0)];
}
