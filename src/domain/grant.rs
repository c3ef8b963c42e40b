use serde::{Deserialize, Serialize};

use crate::config::constants::MONTHS_PER_YEAR;
use crate::config::{BtcAmount, SchemeId, SchemePreset, preset};
use crate::domain::milestone::VestingConfig;

/// When BTC is awarded: the initial grant immediately, then one grant at each
/// anniversary (months 12, 24, ...) up to `annual_grant_years`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrantSchedule {
    pub initial_grant: BtcAmount,
    pub annual_grant: BtcAmount,
    pub annual_grant_years: u32,
}

impl GrantSchedule {
    pub fn from_preset(p: &SchemePreset) -> Self {
        Self {
            initial_grant: BtcAmount::new(p.initial_grant_btc),
            annual_grant: BtcAmount::new(p.annual_grant_btc),
            annual_grant_years: p.annual_grant_years,
        }
    }

    /// Cumulative BTC granted as of `month`.
    pub fn cumulative_granted(&self, month: u32) -> BtcAmount {
        let anniversaries = (month / MONTHS_PER_YEAR).min(self.annual_grant_years);
        self.initial_grant + self.annual_grant * anniversaries as f64
    }

    /// Total BTC the schedule will ever award.
    pub fn total_granted(&self) -> BtcAmount {
        self.initial_grant + self.annual_grant * self.annual_grant_years as f64
    }
}

/// One selectable scheme: an award schedule plus its unlock configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VestingScheme {
    pub id: SchemeId,
    pub grants: GrantSchedule,
    pub vesting: VestingConfig,
}

impl VestingScheme {
    pub fn from_preset(id: SchemeId) -> Self {
        Self {
            id,
            grants: GrantSchedule::from_preset(preset(id)),
            vesting: VestingConfig::default_unlocks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_grant_is_immediate() {
        let g = GrantSchedule {
            initial_grant: BtcAmount::new(0.02),
            annual_grant: BtcAmount::ZERO,
            annual_grant_years: 0,
        };
        assert_eq!(g.cumulative_granted(0).value(), 0.02);
        assert_eq!(g.cumulative_granted(119).value(), 0.02);
    }

    #[test]
    fn annual_grants_land_on_anniversaries() {
        let g = GrantSchedule {
            initial_grant: BtcAmount::ZERO,
            annual_grant: BtcAmount::new(0.002),
            annual_grant_years: 10,
        };
        assert_eq!(g.cumulative_granted(0), BtcAmount::ZERO);
        assert_eq!(g.cumulative_granted(11), BtcAmount::ZERO);
        assert!((g.cumulative_granted(12).value() - 0.002).abs() < 1e-12);
        assert!((g.cumulative_granted(13).value() - 0.002).abs() < 1e-12);
        assert!((g.cumulative_granted(24).value() - 0.004).abs() < 1e-12);
        // Caps at the configured number of years
        assert!((g.cumulative_granted(240).value() - 0.02).abs() < 1e-12);
        assert_eq!(g.cumulative_granted(240), g.total_granted());
    }

    #[test]
    fn presets_resolve() {
        for id in [SchemeId::Accelerator, SchemeId::SteadyBuilder, SchemeId::SlowBurn] {
            let scheme = VestingScheme::from_preset(id);
            assert!(scheme.grants.total_granted().is_positive());
            assert!(!scheme.vesting.milestones.is_empty());
        }
    }
}
