use serde::{Deserialize, Serialize};

use crate::config::{BtcAmount, PriceMode, SchemeId, UsdPrice, UsdValue};

// ============================================================================
// VestingTimeline: one point per projected month
// ============================================================================

/// A single month of the projection, as consumed by the chart/table/cards.
/// Purely derived; built on demand from the column vectors below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePoint {
    pub month: u32,
    pub vested_amount: BtcAmount,
    pub employer_balance: BtcAmount,
    pub employee_balance: BtcAmount,
    pub total_balance: BtcAmount,
    pub bitcoin_price: UsdPrice,
    pub usd_value: UsdValue,
}

/// Column-oriented month series for one scheme projection.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VestingTimeline {
    pub scheme_id: SchemeId,
    pub mode: PriceMode,

    pub months: Vec<u32>,

    // Balances (BTC)
    pub vested_btc: Vec<f64>,
    pub employer_btc: Vec<f64>,
    pub total_btc: Vec<f64>,

    // Valuation
    pub price_usd: Vec<f64>,
    pub value_usd: Vec<f64>,
}

impl VestingTimeline {
    pub fn with_capacity(scheme_id: SchemeId, mode: PriceMode, len: usize) -> Self {
        Self {
            scheme_id,
            mode,
            months: Vec::with_capacity(len),
            vested_btc: Vec::with_capacity(len),
            employer_btc: Vec::with_capacity(len),
            total_btc: Vec::with_capacity(len),
            price_usd: Vec::with_capacity(len),
            value_usd: Vec::with_capacity(len),
        }
    }

    pub fn push(&mut self, point: TimelinePoint) {
        self.months.push(point.month);
        self.vested_btc.push(point.vested_amount.value());
        self.employer_btc.push(point.employer_balance.value());
        self.total_btc.push(point.total_balance.value());
        self.price_usd.push(point.bitcoin_price.value());
        self.value_usd.push(point.usd_value.value());
    }

    pub fn point(&self, idx: usize) -> TimelinePoint {
        let vested = BtcAmount::new(self.vested_btc[idx]);
        TimelinePoint {
            month: self.months[idx],
            vested_amount: vested,
            employer_balance: BtcAmount::new(self.employer_btc[idx]),
            employee_balance: vested,
            total_balance: BtcAmount::new(self.total_btc[idx]),
            bitcoin_price: UsdPrice::new(self.price_usd[idx]),
            usd_value: UsdValue::new(self.value_usd[idx]),
        }
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn final_point(&self) -> Option<TimelinePoint> {
        if self.is_empty() {
            None
        } else {
            Some(self.point(self.len() - 1))
        }
    }

    /// [month, usd_value] pairs for the plot.
    pub fn value_points(&self) -> Vec<[f64; 2]> {
        self.months
            .iter()
            .zip(&self.value_usd)
            .map(|(&m, &v)| [m as f64, v])
            .collect()
    }

    /// [month, vested_btc] pairs for the plot.
    pub fn vested_points(&self) -> Vec<[f64; 2]> {
        self.months
            .iter()
            .zip(&self.vested_btc)
            .map(|(&m, &v)| [m as f64, v])
            .collect()
    }

    /// [month, price] pairs for the plot.
    pub fn price_points(&self) -> Vec<[f64; 2]> {
        self.months
            .iter()
            .zip(&self.price_usd)
            .map(|(&m, &p)| [m as f64, p])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_point_round_trips() {
        let mut tl = VestingTimeline::with_capacity(SchemeId::Accelerator, PriceMode::Projected, 2);
        let p = TimelinePoint {
            month: 12,
            vested_amount: BtcAmount::new(0.005),
            employer_balance: BtcAmount::new(0.015),
            employee_balance: BtcAmount::new(0.005),
            total_balance: BtcAmount::new(0.02),
            bitcoin_price: UsdPrice::new(120_000.0),
            usd_value: UsdValue::new(600.0),
        };
        tl.push(p);
        assert_eq!(tl.len(), 1);
        assert_eq!(tl.point(0), p);
        assert_eq!(tl.final_point().unwrap().month, 12);
    }

    #[test]
    fn plot_series_align_with_months() {
        let mut tl = VestingTimeline::with_capacity(SchemeId::SlowBurn, PriceMode::Projected, 3);
        for m in 0..3u32 {
            tl.push(TimelinePoint {
                month: m,
                vested_amount: BtcAmount::ZERO,
                employer_balance: BtcAmount::ZERO,
                employee_balance: BtcAmount::ZERO,
                total_balance: BtcAmount::ZERO,
                bitcoin_price: UsdPrice::new(100.0 + m as f64),
                usd_value: UsdValue::ZERO,
            });
        }
        let pts = tl.price_points();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[2], [2.0, 102.0]);
    }
}
