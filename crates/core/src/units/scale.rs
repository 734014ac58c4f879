//! Decimal order-of-magnitude prefixes (milli, kilo, ...).

use serde::{Deserialize, Serialize};

/// SI decimal prefix, `10^exponent`, for exponents in `[-24, 24]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DecimalScale {
    /// 10^-24
    Yocto,
    /// 10^-21
    Zepto,
    /// 10^-18
    Atto,
    /// 10^-15
    Femto,
    /// 10^-12
    Pico,
    /// 10^-9
    Nano,
    /// 10^-6
    Micro,
    /// 10^-3
    Milli,
    /// 10^-2
    Centi,
    /// 10^-1
    Deci,
    /// 10^0
    One,
    /// 10^1
    Deca,
    /// 10^2
    Hecto,
    /// 10^3
    Kilo,
    /// 10^6
    Mega,
    /// 10^9
    Giga,
    /// 10^12
    Tera,
    /// 10^15
    Peta,
    /// 10^18
    Exa,
    /// 10^21
    Zetta,
    /// 10^24
    Yotta,
}

impl DecimalScale {
    /// Every prefix, smallest first.
    pub const ALL: [DecimalScale; 21] = [
        DecimalScale::Yocto,
        DecimalScale::Zepto,
        DecimalScale::Atto,
        DecimalScale::Femto,
        DecimalScale::Pico,
        DecimalScale::Nano,
        DecimalScale::Micro,
        DecimalScale::Milli,
        DecimalScale::Centi,
        DecimalScale::Deci,
        DecimalScale::One,
        DecimalScale::Deca,
        DecimalScale::Hecto,
        DecimalScale::Kilo,
        DecimalScale::Mega,
        DecimalScale::Giga,
        DecimalScale::Tera,
        DecimalScale::Peta,
        DecimalScale::Exa,
        DecimalScale::Zetta,
        DecimalScale::Yotta,
    ];

    /// Decimal exponent of the prefix (`Kilo` -> 3).
    #[inline]
    #[must_use]
    pub const fn exponent(self) -> i32 {
        match self {
            DecimalScale::Yocto => -24,
            DecimalScale::Zepto => -21,
            DecimalScale::Atto => -18,
            DecimalScale::Femto => -15,
            DecimalScale::Pico => -12,
            DecimalScale::Nano => -9,
            DecimalScale::Micro => -6,
            DecimalScale::Milli => -3,
            DecimalScale::Centi => -2,
            DecimalScale::Deci => -1,
            DecimalScale::One => 0,
            DecimalScale::Deca => 1,
            DecimalScale::Hecto => 2,
            DecimalScale::Kilo => 3,
            DecimalScale::Mega => 6,
            DecimalScale::Giga => 9,
            DecimalScale::Tera => 12,
            DecimalScale::Peta => 15,
            DecimalScale::Exa => 18,
            DecimalScale::Zetta => 21,
            DecimalScale::Yotta => 24,
        }
    }

    /// `10^exponent`.
    ///
    /// Returned from literals rather than `powi` so every factor is the
    /// correctly rounded double (`Milli.factor() == 0.001`).
    #[inline]
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            DecimalScale::Yocto => 1e-24,
            DecimalScale::Zepto => 1e-21,
            DecimalScale::Atto => 1e-18,
            DecimalScale::Femto => 1e-15,
            DecimalScale::Pico => 1e-12,
            DecimalScale::Nano => 1e-9,
            DecimalScale::Micro => 1e-6,
            DecimalScale::Milli => 1e-3,
            DecimalScale::Centi => 1e-2,
            DecimalScale::Deci => 1e-1,
            DecimalScale::One => 1.0,
            DecimalScale::Deca => 1e1,
            DecimalScale::Hecto => 1e2,
            DecimalScale::Kilo => 1e3,
            DecimalScale::Mega => 1e6,
            DecimalScale::Giga => 1e9,
            DecimalScale::Tera => 1e12,
            DecimalScale::Peta => 1e15,
            DecimalScale::Exa => 1e18,
            DecimalScale::Zetta => 1e21,
            DecimalScale::Yotta => 1e24,
        }
    }

    /// Scale `value` up by the prefix: `value * factor()`.
    #[inline]
    #[must_use]
    pub fn multiply(self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Scale `value` down by the prefix: `value / factor()`.
    #[inline]
    #[must_use]
    pub fn divide(self, value: f64) -> f64 {
        value / self.factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kilo() {
        let kilo = DecimalScale::Kilo;
        assert_eq!(kilo.exponent(), 3);
        assert_relative_eq!(kilo.factor(), 1000.0);
        assert_relative_eq!(kilo.multiply(5.0), 5000.0);
        assert_relative_eq!(kilo.divide(5.0), 0.005);
    }

    #[test]
    fn test_factor_matches_exponent_for_all_prefixes() {
        for scale in DecimalScale::ALL {
            let expected = 10f64.powi(scale.exponent());
            assert_relative_eq!(scale.factor(), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_all_is_ascending_and_spans_range() {
        let exponents: Vec<i32> = DecimalScale::ALL.into_iter().map(DecimalScale::exponent).collect();
        assert!(exponents.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(exponents.first(), Some(&-24));
        assert_eq!(exponents.last(), Some(&24));
        assert_eq!(DecimalScale::One.factor(), 1.0);
    }

    #[test]
    fn test_multiply_then_divide_round_trips() {
        for scale in DecimalScale::ALL {
            assert_relative_eq!(scale.divide(scale.multiply(42.5)), 42.5, max_relative = 1e-12);
        }
    }
}
