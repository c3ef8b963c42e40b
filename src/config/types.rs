//! Value newtypes shared across the app (Immutable Blueprints)

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// Cumulative vested percentage, clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VestedPct(f64);

impl VestedPct {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(100.0);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 100.0 {
            100.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Fraction in [0, 1] for multiplying amounts.
    #[inline]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    pub fn is_full(self) -> bool {
        self.0 >= 100.0 - f64::EPSILON
    }
}

impl std::fmt::Display for VestedPct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Annual growth rate as a fraction (0.30 = 30% per year).
/// Negative rates are allowed down to a near-total-loss floor.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct GrowthPct(f64);

impl GrowthPct {
    pub const MIN_VALUE: f64 = -0.95;
    pub const MAX_VALUE: f64 = 5.0;

    pub const fn new(val: f64) -> Self {
        let v = if val < Self::MIN_VALUE {
            Self::MIN_VALUE
        } else if val > Self::MAX_VALUE {
            Self::MAX_VALUE
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for GrowthPct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.0}%/yr", self.0 * 100.0)
    }
}

/// An amount of Bitcoin. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BtcAmount(f64);

impl BtcAmount {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > f64::EPSILON
    }
}

impl Add for BtcAmount {
    type Output = BtcAmount;

    fn add(self, rhs: Self) -> Self::Output {
        BtcAmount::new(self.0 + rhs.0)
    }
}

impl AddAssign for BtcAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for BtcAmount {
    type Output = BtcAmount;

    // Saturates at zero, amounts are never negative
    fn sub(self, rhs: Self) -> Self::Output {
        BtcAmount::new(self.0 - rhs.0)
    }
}

impl Mul<f64> for BtcAmount {
    type Output = BtcAmount;

    fn mul(self, rhs: f64) -> Self::Output {
        BtcAmount::new(self.0 * rhs)
    }
}

impl Mul<UsdPrice> for BtcAmount {
    type Output = UsdValue;

    fn mul(self, rhs: UsdPrice) -> Self::Output {
        UsdValue::new(self.0 * rhs.0)
    }
}

impl std::fmt::Display for BtcAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "₿{:.8}", self.0)
    }
}

/// A USD exchange rate for one Bitcoin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct UsdPrice(f64);

impl UsdPrice {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > f64::EPSILON
    }
}

impl Mul<f64> for UsdPrice {
    type Output = UsdPrice;

    fn mul(self, rhs: f64) -> Self::Output {
        UsdPrice::new(self.0 * rhs)
    }
}

impl std::fmt::Display for UsdPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Adaptive decimals by magnitude
        let price = self.0;
        if price >= 1000.0 {
            write!(f, "${:.0}", price)
        } else if price >= 1.0 {
            write!(f, "${:.2}", price)
        } else {
            write!(f, "${:.4}", price)
        }
    }
}

/// A USD valuation (balance * price). Compact display for cards and tables.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct UsdValue(f64);

impl UsdValue {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for UsdValue {
    type Output = UsdValue;

    fn add(self, rhs: Self) -> Self::Output {
        UsdValue::new(self.0 + rhs.0)
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = self.0;
        if val >= 1_000_000.0 {
            write!(f, "${:.2}M", val / 1_000_000.0)
        } else if val >= 10_000.0 {
            write!(f, "${:.0}K", val / 1_000.0)
        } else if val >= 1_000.0 {
            write!(f, "${:.1}K", val / 1_000.0)
        } else {
            write!(f, "${:.0}", val)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vested_pct_clamps_to_bounds() {
        assert_eq!(VestedPct::new(-5.0).value(), 0.0);
        assert_eq!(VestedPct::new(150.0).value(), 100.0);
        assert_eq!(VestedPct::new(42.5).value(), 42.5);
    }

    #[test]
    fn btc_amount_never_negative() {
        assert_eq!(BtcAmount::new(-1.0).value(), 0.0);
        let a = BtcAmount::new(0.01);
        let b = BtcAmount::new(0.02);
        assert_eq!((a - b).value(), 0.0);
        assert!(((b - a).value() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn btc_times_price_is_usd_value() {
        let v = BtcAmount::new(0.5) * UsdPrice::new(100_000.0);
        assert_eq!(v.value(), 50_000.0);
    }
}
