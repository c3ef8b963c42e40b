use crate::config::VestedPct;
use crate::domain::{VestingScheme, VestingSchedule};
use crate::models::summary::{BenefitSummary, NextUnlock};
use crate::models::timeline::VestingTimeline;

/// Reduce a finished timeline to the card/report numbers.
pub fn summarize(
    timeline: &VestingTimeline,
    scheme: &VestingScheme,
    schedule: &VestingSchedule,
) -> BenefitSummary {
    let total_granted = scheme.grants.total_granted();

    let Some(first) = (!timeline.is_empty()).then(|| timeline.point(0)) else {
        return BenefitSummary::default();
    };
    let last = timeline.final_point().unwrap_or(first);

    let vested_pct_now = if total_granted.is_positive() {
        VestedPct::new(first.vested_amount.value() / total_granted.value() * 100.0)
    } else {
        VestedPct::ZERO
    };

    // Multiple vs holding the full grant at the starting price
    let start_valuation = total_granted * first.bitcoin_price;
    let growth_multiple = if start_valuation.value() > f64::EPSILON {
        last.usd_value.value() / start_valuation.value()
    } else {
        0.0
    };

    let next_unlock = schedule
        .next_unlock_after(first.month as f64)
        .map(|(month, grant_percent)| NextUnlock {
            month,
            grant_percent,
        });

    BenefitSummary {
        total_granted,
        vested_now: first.vested_amount,
        vested_pct_now,
        value_now: first.usd_value,
        vested_at_horizon: last.vested_amount,
        value_at_horizon: last.usd_value,
        growth_multiple,
        next_unlock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::projector::{MonthlyPrices, project_timeline};
    use crate::config::{GrowthPct, SchemeId, UsdPrice};

    #[test]
    fn summary_of_a_preset_projection() {
        let scheme = VestingScheme::from_preset(SchemeId::Accelerator);
        let schedule = VestingSchedule::new(scheme.vesting.clone()).unwrap();
        let prices = MonthlyPrices::Projected {
            start: UsdPrice::new(100_000.0),
            annual_growth: GrowthPct::new(0.0),
        };
        let tl = project_timeline(&scheme, &schedule, &prices, 120);
        let s = summarize(&tl, &scheme, &schedule);

        assert_eq!(s.total_granted, scheme.grants.total_granted());
        // Nothing vested at month 0; first unlock is the 5-year step
        assert_eq!(s.vested_pct_now, VestedPct::ZERO);
        let unlock = s.next_unlock.unwrap();
        assert_eq!(unlock.month, 60.0);
        assert_eq!(unlock.grant_percent.value(), 50.0);
        // Flat prices, full vesting at horizon: multiple is exactly 1
        assert!((s.growth_multiple - 1.0).abs() < 1e-9);
        assert_eq!(s.vested_at_horizon, s.total_granted);
    }

    #[test]
    fn fully_vested_timeline_has_no_next_unlock() {
        let scheme = VestingScheme::from_preset(SchemeId::Accelerator);
        let schedule = VestingSchedule::new(scheme.vesting.clone()).unwrap();
        assert!(schedule.next_unlock_after(120.0).is_none());
    }

    #[test]
    fn empty_timeline_summarizes_to_default() {
        let scheme = VestingScheme::from_preset(SchemeId::SlowBurn);
        let schedule = VestingSchedule::new(scheme.vesting.clone()).unwrap();
        let s = summarize(&VestingTimeline::default(), &scheme, &schedule);
        assert_eq!(s, BenefitSummary::default());
    }
}
