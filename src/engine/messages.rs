use std::sync::Arc;

use crate::config::{ProjectionSettings, SchemeId};
use crate::domain::VestingScheme;
use crate::models::{BenefitSummary, PriceHistory, VestingTimeline};

/// A request to project one scheme
#[derive(Debug, Clone)]
pub struct JobRequest {
    pub scheme: VestingScheme,
    pub settings: ProjectionSettings,
    /// Spot price snapshot at dispatch time (projected mode seed)
    pub spot_price: Option<f64>,
    pub history: Arc<PriceHistory>,
}

/// Everything the worker produces for one scheme
#[derive(Debug, Clone)]
pub struct SchemeOutcome {
    pub timeline: VestingTimeline,
    pub summary: BenefitSummary,
    /// (month, cumulative percent) unlock breakpoints, for chart markers
    pub unlock_markers: Vec<(f64, f64)>,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct JobResult {
    pub scheme_id: SchemeId,
    pub duration_ms: u128,

    pub result: Result<Arc<SchemeOutcome>, String>,
}
