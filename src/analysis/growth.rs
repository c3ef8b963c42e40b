use crate::config::{GrowthPct, UsdPrice};
use crate::utils::compound_factor;

/// Price on the projected growth curve at `month`.
/// Monthly compounding of the annual rate, so twelve steps land exactly on
/// one year of growth.
pub fn projected_price(start: UsdPrice, annual_growth: GrowthPct, month: u32) -> UsdPrice {
    start * compound_factor(annual_growth.value(), month as f64 / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_zero_is_the_start_price() {
        let p = projected_price(UsdPrice::new(100_000.0), GrowthPct::new(0.30), 0);
        assert_eq!(p.value(), 100_000.0);
    }

    #[test]
    fn twelve_months_equals_one_annual_step() {
        let p = projected_price(UsdPrice::new(100_000.0), GrowthPct::new(0.30), 12);
        assert!((p.value() - 130_000.0).abs() < 1e-6);
    }

    #[test]
    fn negative_growth_decays() {
        let p = projected_price(UsdPrice::new(100_000.0), GrowthPct::new(-0.50), 24);
        assert!((p.value() - 25_000.0).abs() < 1e-6);
    }

    #[test]
    fn curve_is_monotonic_for_positive_growth() {
        let start = UsdPrice::new(50_000.0);
        let g = GrowthPct::new(0.20);
        let mut last = 0.0;
        for m in 0..=240 {
            let p = projected_price(start, g, m).value();
            assert!(p > last);
            last = p;
        }
    }
}
