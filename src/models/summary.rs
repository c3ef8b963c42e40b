use serde::{Deserialize, Serialize};

use crate::config::{BtcAmount, UsdValue, VestedPct};

/// The next unlock still ahead of "now".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NextUnlock {
    pub month: f64,
    pub grant_percent: VestedPct,
}

/// Headline numbers for the analytics cards and the report tool.
/// Produced from a finished timeline by `analysis::summarize`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BenefitSummary {
    /// Everything the schedule will ever award.
    pub total_granted: BtcAmount,

    /// Position at month 0 of the timeline ("today" in projected mode).
    pub vested_now: BtcAmount,
    pub vested_pct_now: VestedPct,
    pub value_now: UsdValue,

    /// Position at the final timeline month.
    pub vested_at_horizon: BtcAmount,
    pub value_at_horizon: UsdValue,

    /// value_at_horizon / value of total grant at month-0 price.
    /// 0.0 when the starting valuation is zero.
    pub growth_multiple: f64,

    pub next_unlock: Option<NextUnlock>,
}
