use anyhow::{Result, bail};

use crate::config::{BtcAmount, VestedPct};
use crate::domain::milestone::{CustomVestingEvent, Milestone, VestingConfig};

/// The cumulative unlock step applicable at some elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VestedStep {
    pub grant_percent: VestedPct,
}

/// Evaluates a vesting configuration as a right-continuous step function of
/// elapsed months. Immutable once constructed; build a new one per config.
///
/// Query behavior never errors: elapsed time before the first breakpoint (or
/// an empty configuration) reads as 0% vested, and time past the last
/// breakpoint saturates at its percentage.
#[derive(Debug, Clone)]
pub struct VestingSchedule {
    milestones: Vec<Milestone>,
    custom_events: Vec<CustomVestingEvent>,
}

impl VestingSchedule {
    /// Orders breakpoints ascending and rejects configurations whose
    /// percentages decrease as time increases.
    pub fn new(config: VestingConfig) -> Result<Self> {
        let VestingConfig {
            mut milestones,
            mut custom_events,
        } = config;

        milestones.sort_by_key(|m| m.months);
        custom_events.sort_by(|a, b| a.time_period.total_cmp(&b.time_period));

        for pair in milestones.windows(2) {
            if pair[1].grant_percent < pair[0].grant_percent {
                bail!(
                    "milestone percentages must be non-decreasing: {} at month {} follows {} at month {}",
                    pair[1].grant_percent,
                    pair[1].months,
                    pair[0].grant_percent,
                    pair[0].months
                );
            }
        }

        for event in &custom_events {
            if !event.time_period.is_finite() {
                bail!("custom vesting event '{}' has a non-finite time", event.label);
            }
        }

        for pair in custom_events.windows(2) {
            if pair[1].percentage_vested < pair[0].percentage_vested {
                bail!(
                    "custom vesting events must be non-decreasing: '{}' ({}) follows '{}' ({})",
                    pair[1].label,
                    pair[1].percentage_vested,
                    pair[0].label,
                    pair[0].percentage_vested
                );
            }
        }

        Ok(Self {
            milestones,
            custom_events,
        })
    }

    fn uses_custom_events(&self) -> bool {
        !self.custom_events.is_empty()
    }

    /// Cumulative grant percentage applicable at `elapsed_months`:
    /// the last breakpoint at or before that time. Exact equality at a
    /// breakpoint includes it (closed lower bound).
    pub fn current_milestone(&self, elapsed_months: f64) -> VestedStep {
        let grant_percent = if self.uses_custom_events() {
            self.custom_events
                .iter()
                .take_while(|e| e.time_period <= elapsed_months)
                .last()
                .map(|e| e.percentage_vested)
                .unwrap_or(VestedPct::ZERO)
        } else {
            self.milestones
                .iter()
                .take_while(|m| m.months as f64 <= elapsed_months)
                .last()
                .map(|m| m.grant_percent)
                .unwrap_or(VestedPct::ZERO)
        };

        VestedStep { grant_percent }
    }

    /// `total_grant * grant_percent / 100`. Pure; same inputs, same output.
    pub fn vested_amount(&self, total_grant: BtcAmount, elapsed_months: f64) -> BtcAmount {
        let pct = self.current_milestone(elapsed_months).grant_percent;
        BtcAmount::new(total_grant.value() * pct.value() / 100.0)
    }

    /// The first breakpoint strictly after `elapsed_months`, if any remains.
    pub fn next_unlock_after(&self, elapsed_months: f64) -> Option<(f64, VestedPct)> {
        self.breakpoints()
            .into_iter()
            .find(|&(t, _)| t > elapsed_months)
    }

    /// All breakpoints in time order, whichever mode is active.
    /// Used for chart markers and the next-unlock card.
    pub fn breakpoints(&self) -> Vec<(f64, VestedPct)> {
        if self.uses_custom_events() {
            self.custom_events
                .iter()
                .map(|e| (e.time_period, e.percentage_vested))
                .collect()
        } else {
            self.milestones
                .iter()
                .map(|m| (m.months as f64, m.grant_percent))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(steps: &[(f64, f64)]) -> Vec<CustomVestingEvent> {
        steps
            .iter()
            .map(|&(t, p)| CustomVestingEvent::new(t, p, format!("{p}% unlock")))
            .collect()
    }

    fn schedule_from_events(steps: &[(f64, f64)]) -> VestingSchedule {
        VestingSchedule::new(VestingConfig {
            milestones: vec![],
            custom_events: events(steps),
        })
        .unwrap()
    }

    // The reference scenario: 10/25/50/75/100 at months 3/12/24/36/48.
    fn reference() -> VestingSchedule {
        schedule_from_events(&[
            (3.0, 10.0),
            (12.0, 25.0),
            (24.0, 50.0),
            (36.0, 75.0),
            (48.0, 100.0),
        ])
    }

    #[test]
    fn zero_before_first_breakpoint() {
        let s = reference();
        assert_eq!(s.current_milestone(0.0).grant_percent, VestedPct::ZERO);
        assert_eq!(s.current_milestone(2.0).grant_percent, VestedPct::ZERO);
        assert_eq!(s.current_milestone(-5.0).grant_percent, VestedPct::ZERO);
    }

    #[test]
    fn breakpoint_equality_is_inclusive() {
        let s = reference();
        assert_eq!(s.current_milestone(3.0).grant_percent.value(), 10.0);
        assert_eq!(s.current_milestone(12.0).grant_percent.value(), 25.0);
    }

    #[test]
    fn step_function_holds_between_breakpoints() {
        let s = reference();
        assert_eq!(s.current_milestone(6.0).grant_percent.value(), 10.0);
        assert_eq!(s.current_milestone(11.99).grant_percent.value(), 10.0);
        assert_eq!(s.current_milestone(30.0).grant_percent.value(), 50.0);
    }

    #[test]
    fn saturates_past_last_breakpoint() {
        let s = reference();
        assert_eq!(s.current_milestone(48.0).grant_percent.value(), 100.0);
        assert_eq!(s.current_milestone(500.0).grant_percent.value(), 100.0);
    }

    #[test]
    fn vested_amount_is_exact_product() {
        let s = reference();
        let grant = BtcAmount::new(0.02);
        assert!((s.vested_amount(grant, 24.0).value() - 0.01).abs() < 1e-12);
        assert!((s.vested_amount(grant, 48.0).value() - 0.02).abs() < 1e-12);
        // Identity with current_milestone at arbitrary points
        for t in [0.0, 2.5, 3.0, 17.0, 48.0, 300.0] {
            let expected = grant.value() * s.current_milestone(t).grant_percent.value() / 100.0;
            assert_eq!(s.vested_amount(grant, t).value(), expected);
        }
    }

    #[test]
    fn percentage_is_monotonic_and_bounded() {
        let s = reference();
        let mut last = -1.0;
        let mut t = -6.0;
        while t <= 60.0 {
            let pct = s.current_milestone(t).grant_percent.value();
            assert!(pct >= last, "decreased at t={t}");
            assert!((0.0..=100.0).contains(&pct));
            last = pct;
            t += 0.25;
        }
    }

    #[test]
    fn custom_events_override_milestones_entirely() {
        let config = VestingConfig {
            milestones: vec![Milestone::new(1, 99.0)],
            custom_events: events(&[(6.0, 40.0)]),
        };
        let s = VestingSchedule::new(config).unwrap();
        // Milestone at month 1 must be invisible
        assert_eq!(s.current_milestone(1.0).grant_percent, VestedPct::ZERO);
        assert_eq!(s.current_milestone(6.0).grant_percent.value(), 40.0);
    }

    #[test]
    fn empty_event_list_falls_back_to_milestones() {
        let config = VestingConfig {
            milestones: vec![Milestone::new(12, 50.0), Milestone::new(24, 100.0)],
            custom_events: vec![],
        };
        let s = VestingSchedule::new(config).unwrap();
        assert_eq!(s.current_milestone(12.0).grant_percent.value(), 50.0);
        assert_eq!(s.current_milestone(23.0).grant_percent.value(), 50.0);
    }

    #[test]
    fn empty_config_reads_as_never_vested() {
        let s = VestingSchedule::new(VestingConfig::default()).unwrap();
        assert_eq!(s.current_milestone(120.0).grant_percent, VestedPct::ZERO);
        assert_eq!(
            s.vested_amount(BtcAmount::new(1.0), 120.0),
            BtcAmount::ZERO
        );
    }

    #[test]
    fn unsorted_input_is_ordered_at_construction() {
        let s = schedule_from_events(&[(24.0, 50.0), (3.0, 10.0), (12.0, 25.0)]);
        assert_eq!(s.current_milestone(12.0).grant_percent.value(), 25.0);
    }

    #[test]
    fn decreasing_percentages_fail_construction() {
        let config = VestingConfig {
            milestones: vec![Milestone::new(12, 50.0), Milestone::new(24, 25.0)],
            custom_events: vec![],
        };
        assert!(VestingSchedule::new(config).is_err());

        let config = VestingConfig {
            milestones: vec![],
            custom_events: events(&[(6.0, 80.0), (12.0, 20.0)]),
        };
        assert!(VestingSchedule::new(config).is_err());
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let s = reference();
        let grant = BtcAmount::new(0.02);
        let first = s.vested_amount(grant, 36.0);
        for _ in 0..10 {
            assert_eq!(s.vested_amount(grant, 36.0), first);
        }
    }
}
