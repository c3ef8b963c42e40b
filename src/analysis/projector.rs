use crate::analysis::growth::projected_price;
use crate::config::{GrowthPct, PriceMode, UsdPrice};
use crate::domain::{VestingScheme, VestingSchedule};
use crate::models::price_series::PriceHistory;
use crate::models::timeline::{TimelinePoint, VestingTimeline};

/// Where the month-by-month price comes from.
pub enum MonthlyPrices<'a> {
    /// Growth curve seeded from a spot price.
    Projected {
        start: UsdPrice,
        annual_growth: GrowthPct,
    },
    /// Actual monthly closes, starting at `start_idx` of the history.
    Historical {
        history: &'a PriceHistory,
        start_idx: usize,
    },
}

impl MonthlyPrices<'_> {
    pub fn price_at(&self, month: u32) -> UsdPrice {
        match self {
            MonthlyPrices::Projected {
                start,
                annual_growth,
            } => projected_price(*start, *annual_growth, month),
            MonthlyPrices::Historical { history, start_idx } => {
                history.close_at_offset(*start_idx, month)
            }
        }
    }

    pub fn mode(&self) -> PriceMode {
        match self {
            MonthlyPrices::Projected { .. } => PriceMode::Projected,
            MonthlyPrices::Historical { .. } => PriceMode::Historical,
        }
    }
}

/// The projection loop: one point per month over `0..=horizon_months`.
///
/// Per month: cumulative granted BTC from the grant schedule, cumulative
/// vested percentage from the schedule evaluator, then the valuation at that
/// month's price. Linear in the horizon; pure given its inputs.
pub fn project_timeline(
    scheme: &VestingScheme,
    schedule: &VestingSchedule,
    prices: &MonthlyPrices<'_>,
    horizon_months: u32,
) -> VestingTimeline {
    let mut timeline = VestingTimeline::with_capacity(
        scheme.id,
        prices.mode(),
        horizon_months as usize + 1,
    );

    for month in 0..=horizon_months {
        let total = scheme.grants.cumulative_granted(month);
        let vested = schedule.vested_amount(total, month as f64);
        let price = prices.price_at(month);

        timeline.push(TimelinePoint {
            month,
            vested_amount: vested,
            employer_balance: total - vested,
            employee_balance: vested,
            total_balance: total,
            bitcoin_price: price,
            usd_value: vested * price,
        });
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BtcAmount, SchemeId};
    use crate::domain::{CustomVestingEvent, GrantSchedule, VestingConfig};

    fn flat_prices() -> MonthlyPrices<'static> {
        MonthlyPrices::Projected {
            start: UsdPrice::new(100_000.0),
            annual_growth: GrowthPct::new(0.0),
        }
    }

    fn scenario_scheme() -> VestingScheme {
        // The reference scenario: one 0.02 BTC grant, custom unlock steps.
        VestingScheme {
            id: SchemeId::Accelerator,
            grants: GrantSchedule {
                initial_grant: BtcAmount::new(0.02),
                annual_grant: BtcAmount::ZERO,
                annual_grant_years: 0,
            },
            vesting: VestingConfig {
                milestones: vec![],
                custom_events: vec![
                    CustomVestingEvent::new(3.0, 10.0, "cliff"),
                    CustomVestingEvent::new(12.0, 25.0, "year 1"),
                    CustomVestingEvent::new(24.0, 50.0, "year 2"),
                    CustomVestingEvent::new(36.0, 75.0, "year 3"),
                    CustomVestingEvent::new(48.0, 100.0, "year 4"),
                ],
            },
        }
    }

    #[test]
    fn horizon_yields_inclusive_month_range() {
        let scheme = scenario_scheme();
        let schedule = VestingSchedule::new(scheme.vesting.clone()).unwrap();
        let tl = project_timeline(&scheme, &schedule, &flat_prices(), 120);
        assert_eq!(tl.len(), 121);
        assert_eq!(tl.months[0], 0);
        assert_eq!(tl.months[120], 120);
    }

    #[test]
    fn reference_scenario_values() {
        let scheme = scenario_scheme();
        let schedule = VestingSchedule::new(scheme.vesting.clone()).unwrap();
        let tl = project_timeline(&scheme, &schedule, &flat_prices(), 60);

        assert_eq!(tl.point(2).vested_amount, BtcAmount::ZERO);
        assert!((tl.point(3).vested_amount.value() - 0.002).abs() < 1e-12);
        assert!((tl.point(24).vested_amount.value() - 0.01).abs() < 1e-12);
        assert!((tl.point(48).vested_amount.value() - 0.02).abs() < 1e-12);
        // Fully vested: nothing left on the employer side
        assert_eq!(tl.point(48).employer_balance, BtcAmount::ZERO);
        // 0.01 BTC at $100k
        assert!((tl.point(24).usd_value.value() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn balances_always_partition_the_total() {
        let scheme = VestingScheme::from_preset(SchemeId::SteadyBuilder);
        let schedule = VestingSchedule::new(scheme.vesting.clone()).unwrap();
        let prices = MonthlyPrices::Projected {
            start: UsdPrice::new(80_000.0),
            annual_growth: GrowthPct::new(0.25),
        };
        let tl = project_timeline(&scheme, &schedule, &prices, 180);

        for idx in 0..tl.len() {
            let p = tl.point(idx);
            let sum = p.employee_balance + p.employer_balance;
            assert!((sum.value() - p.total_balance.value()).abs() < 1e-12);
            assert_eq!(p.employee_balance, p.vested_amount);
        }
    }

    #[test]
    fn projection_is_deterministic() {
        let scheme = scenario_scheme();
        let schedule = VestingSchedule::new(scheme.vesting.clone()).unwrap();
        let a = project_timeline(&scheme, &schedule, &flat_prices(), 48);
        let b = project_timeline(&scheme, &schedule, &flat_prices(), 48);
        assert_eq!(a.value_usd, b.value_usd);
        assert_eq!(a.vested_btc, b.vested_btc);
    }

    #[test]
    fn historical_prices_flow_into_points() {
        use crate::models::price_series::PricePoint;
        use crate::utils::TimeUtils;

        let points = (0..60)
            .map(|i| PricePoint {
                timestamp_ms: i as i64 * TimeUtils::MS_IN_1_MO,
                close: 20_000.0 + i as f64 * 500.0,
            })
            .collect();
        let history = PriceHistory::from_points("BTCUSDT", TimeUtils::MS_IN_1_MO, points);

        let scheme = scenario_scheme();
        let schedule = VestingSchedule::new(scheme.vesting.clone()).unwrap();
        let prices = MonthlyPrices::Historical {
            history: &history,
            start_idx: 0,
        };
        let tl = project_timeline(&scheme, &schedule, &prices, 72);

        assert_eq!(tl.point(10).bitcoin_price.value(), 25_000.0);
        // Past the series end the price saturates at the last close
        assert_eq!(tl.point(72).bitcoin_price.value(), tl.point(59).bitcoin_price.value());
    }
}
