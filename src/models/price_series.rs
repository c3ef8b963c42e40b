use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::config::UsdPrice;
use crate::utils::year_start_ms;

// ============================================================================
// PriceHistory: monthly closing prices for one symbol
// ============================================================================

/// A single monthly close as it comes off the exchange or the cache.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub close: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PriceHistory {
    pub symbol: String,
    pub interval_ms: i64,

    pub timestamps: Vec<i64>,
    pub closes: Vec<f64>,
}

impl PriceHistory {
    /// Build a history from chronological points (loaded from DB or API).
    pub fn from_points(symbol: impl Into<String>, interval_ms: i64, points: Vec<PricePoint>) -> Self {
        let len = points.len();

        // Pre-allocate everything
        let mut ts_vec = Vec::with_capacity(len);
        let mut close_vec = Vec::with_capacity(len);

        for p in points {
            ts_vec.push(p.timestamp_ms);
            close_vec.push(p.close);
        }

        Self {
            symbol: symbol.into(),
            interval_ms,
            timestamps: ts_vec,
            closes: close_vec,
        }
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn point(&self, idx: usize) -> PricePoint {
        PricePoint {
            timestamp_ms: self.timestamps[idx],
            close: self.closes[idx],
        }
    }

    /// Most recent known close. The offline fallback for a spot price.
    pub fn latest_close(&self) -> Option<UsdPrice> {
        self.closes.last().map(|&c| UsdPrice::new(c))
    }

    /// Index of the first point at or after Jan 1st of `year`.
    pub fn index_of_year(&self, year: i32) -> Result<usize> {
        let start = year_start_ms(year);
        self.timestamps
            .iter()
            .position(|&ts| ts >= start)
            .ok_or_else(|| anyhow!("no {} price data at or after {}", self.symbol, year))
    }

    /// Close at `start_idx + month_offset`, saturating at the last known
    /// close once the series runs out.
    pub fn close_at_offset(&self, start_idx: usize, month_offset: u32) -> UsdPrice {
        if self.closes.is_empty() {
            return UsdPrice::default();
        }
        let idx = (start_idx + month_offset as usize).min(self.closes.len() - 1);
        UsdPrice::new(self.closes[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    fn history() -> PriceHistory {
        // Jan 2020 onwards, one point per 30d bucket
        let start = year_start_ms(2020);
        let points = (0..24)
            .map(|i| PricePoint {
                timestamp_ms: start + i as i64 * TimeUtils::MS_IN_1_MO,
                close: 10_000.0 + i as f64 * 1000.0,
            })
            .collect();
        PriceHistory::from_points("BTCUSDT", TimeUtils::MS_IN_1_MO, points)
    }

    #[test]
    fn year_lookup_finds_first_point() {
        let h = history();
        assert_eq!(h.index_of_year(2020).unwrap(), 0);
        assert!(h.index_of_year(2019).unwrap() == 0);
        assert!(h.index_of_year(2030).is_err());
    }

    #[test]
    fn offset_saturates_at_series_end() {
        let h = history();
        assert_eq!(h.close_at_offset(0, 0).value(), 10_000.0);
        assert_eq!(h.close_at_offset(0, 5).value(), 15_000.0);
        // Way past the end: last known close
        assert_eq!(h.close_at_offset(0, 500).value(), 33_000.0);
    }

    #[test]
    fn empty_history_reads_as_zero() {
        let h = PriceHistory::default();
        assert_eq!(h.close_at_offset(0, 10).value(), 0.0);
        assert!(h.latest_close().is_none());
    }
}
