use argminmax::ArgMinMax;

/// Compound an annual growth rate over a fractional number of years.
/// `compound_factor(0.30, 1.0)` == 1.3; month-level callers pass `months / 12`.
#[inline]
pub fn compound_factor(annual_rate: f64, years: f64) -> f64 {
    let base = 1.0 + annual_rate;
    if base <= 0.0 {
        return 0.0;
    }
    base.powf(years)
}

/// Fractional difference between two values relative to the reference.
pub fn percent_diff(value: f64, reference: f64) -> f64 {
    if reference.abs() <= f64::EPSILON {
        return 0.0;
    }
    (value - reference).abs() / reference
}

#[inline]
pub fn get_max(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    let max_index: usize = vec.argmax();
    vec[max_index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_factor_one_year_is_rate() {
        assert!((compound_factor(0.30, 1.0) - 1.30).abs() < 1e-12);
    }

    #[test]
    fn compound_factor_monthly_steps_multiply_to_annual() {
        // 12 equal monthly steps must land exactly on the annual factor
        let annual = compound_factor(0.5, 1.0);
        let monthly = compound_factor(0.5, 1.0 / 12.0);
        assert!((monthly.powi(12) - annual).abs() < 1e-9);
    }

    #[test]
    fn percent_diff_handles_zero_reference() {
        assert_eq!(percent_diff(5.0, 0.0), 0.0);
        assert!((percent_diff(110.0, 100.0) - 0.1).abs() < 1e-12);
    }
}
