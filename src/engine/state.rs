use std::sync::Arc;

use crate::domain::VestingScheme;
use crate::engine::messages::SchemeOutcome;
use crate::utils::AppInstant;

/// Per-scheme runtime state held by the engine.
pub struct SchemeState {
    pub scheme: VestingScheme,
    pub outcome: Option<Arc<SchemeOutcome>>,
    pub is_calculating: bool,
    pub last_error: Option<String>,

    /// Spot price at the last dispatched projection (drift-trigger baseline)
    pub last_update_price: f64,
    pub last_update_time: Option<AppInstant>,
}

impl SchemeState {
    pub fn new(scheme: VestingScheme) -> Self {
        Self {
            scheme,
            outcome: None,
            is_calculating: false,
            last_error: None,
            last_update_price: 0.0,
            last_update_time: None,
        }
    }
}
