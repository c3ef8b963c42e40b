use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::VestedPct;
use crate::config::constants::unlock;

/// A discrete unlock breakpoint: cumulative percentage reached at `months` elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub months: u32,
    pub grant_percent: VestedPct,
}

impl Milestone {
    pub fn new(months: u32, grant_percent: f64) -> Self {
        Self {
            months,
            grant_percent: VestedPct::new(grant_percent),
        }
    }
}

/// A user-defined unlock breakpoint. Same cumulative semantics as Milestone,
/// but the time axis may be fractional and every row carries a label and a
/// stable id for the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomVestingEvent {
    pub id: String,
    pub time_period: f64, // months, may be fractional
    pub percentage_vested: VestedPct,
    pub label: String,
}

impl CustomVestingEvent {
    pub fn new(time_period: f64, percentage_vested: f64, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            time_period,
            percentage_vested: VestedPct::new(percentage_vested),
            label: label.into(),
        }
    }
}

/// The full unlock configuration for one scheme.
/// When `custom_events` is non-empty it replaces the milestone list entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VestingConfig {
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub custom_events: Vec<CustomVestingEvent>,
}

impl VestingConfig {
    /// The default unlock schedule shared by the preset schemes.
    pub fn default_unlocks() -> Self {
        Self {
            milestones: unlock::DEFAULT_STEPS
                .iter()
                .map(|&(months, pct)| Milestone::new(months, pct))
                .collect(),
            custom_events: Vec::new(),
        }
    }

    pub fn has_custom_events(&self) -> bool {
        !self.custom_events.is_empty()
    }
}
