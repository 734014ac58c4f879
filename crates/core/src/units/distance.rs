//! Non-negative lengths stored in meters.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use tracing::debug;

use super::quantity::{canonical, f64_total_cmp, parse_quantity, PhysicalQuantity, QuantityUnit};
use super::scale::DecimalScale;
use super::unit::{Conversion, Unit};
use crate::error::{QuantityError, Result};

// ============================================================================
// UNIT CATALOG
// ============================================================================

/// A unit of length, converting to and from meters.
#[derive(Debug, Clone, Copy)]
pub struct DistanceUnit(Unit);

// Empirical per-meter factors, not the exact international definitions.
const INCHES_PER_METER: f64 = 39.37;
const FEET_PER_METER: f64 = 3.2808;
const YARDS_PER_METER: f64 = 1.0936;
const MILES_PER_METER: f64 = 0.00062137;
const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

fn inches_to_meters(v: f64) -> f64 {
    v / INCHES_PER_METER
}

fn meters_to_inches(v: f64) -> f64 {
    v * INCHES_PER_METER
}

fn feet_to_meters(v: f64) -> f64 {
    v / FEET_PER_METER
}

fn meters_to_feet(v: f64) -> f64 {
    v * FEET_PER_METER
}

fn yards_to_meters(v: f64) -> f64 {
    v / YARDS_PER_METER
}

fn meters_to_yards(v: f64) -> f64 {
    v * YARDS_PER_METER
}

fn miles_to_meters(v: f64) -> f64 {
    v / MILES_PER_METER
}

fn meters_to_miles(v: f64) -> f64 {
    v * MILES_PER_METER
}

fn nautical_miles_to_meters(v: f64) -> f64 {
    v * METERS_PER_NAUTICAL_MILE
}

fn meters_to_nautical_miles(v: f64) -> f64 {
    v / METERS_PER_NAUTICAL_MILE
}

impl DistanceUnit {
    /// 10⁻⁹ m.
    pub const NANOMETER: DistanceUnit = DistanceUnit::scaled("nm", DecimalScale::Nano);
    /// 10⁻⁶ m.
    pub const MICROMETER: DistanceUnit = DistanceUnit::scaled("μm", DecimalScale::Micro);
    /// 10⁻³ m.
    pub const MILLIMETER: DistanceUnit = DistanceUnit::scaled("mm", DecimalScale::Milli);
    /// 10⁻² m.
    pub const CENTIMETER: DistanceUnit = DistanceUnit::scaled("cm", DecimalScale::Centi);
    /// 10⁻¹ m.
    pub const DECIMETER: DistanceUnit = DistanceUnit::scaled("dm", DecimalScale::Deci);
    /// SI base unit of length.
    pub const METER: DistanceUnit = DistanceUnit(Unit::from_parts("m", Conversion::Identity));
    /// 10 m.
    pub const DECAMETER: DistanceUnit = DistanceUnit::scaled("dam", DecimalScale::Deca);
    /// 100 m.
    pub const HECTOMETER: DistanceUnit = DistanceUnit::scaled("hm", DecimalScale::Hecto);
    /// 1000 m.
    pub const KILOMETER: DistanceUnit = DistanceUnit::scaled("km", DecimalScale::Kilo);
    /// 1/39.37 m.
    pub const INCH: DistanceUnit = DistanceUnit::custom("in", inches_to_meters, meters_to_inches);
    /// 1/3.2808 m.
    pub const FOOT: DistanceUnit = DistanceUnit::custom("ft", feet_to_meters, meters_to_feet);
    /// 1/1.0936 m.
    pub const YARD: DistanceUnit = DistanceUnit::custom("yd", yards_to_meters, meters_to_yards);
    /// 1/0.00062137 m.
    pub const MILE: DistanceUnit = DistanceUnit::custom("mi", miles_to_meters, meters_to_miles);
    /// 1852 m.
    pub const NAUTICAL_MILE: DistanceUnit =
        DistanceUnit::custom("nmi", nautical_miles_to_meters, meters_to_nautical_miles);

    /// Wrap a user-defined [`Unit`] whose base is the meter.
    pub const fn new(unit: Unit) -> Self {
        DistanceUnit(unit)
    }

    const fn scaled(sign: &'static str, scale: DecimalScale) -> Self {
        DistanceUnit(Unit::from_parts(sign, Conversion::Scaled(scale)))
    }

    const fn custom(
        sign: &'static str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    ) -> Self {
        DistanceUnit(Unit::from_parts(
            sign,
            Conversion::Functions { to_base, from_base },
        ))
    }
}

static CATALOG: [DistanceUnit; 14] = [
    DistanceUnit::NANOMETER,
    DistanceUnit::MICROMETER,
    DistanceUnit::MILLIMETER,
    DistanceUnit::CENTIMETER,
    DistanceUnit::DECIMETER,
    DistanceUnit::METER,
    DistanceUnit::DECAMETER,
    DistanceUnit::HECTOMETER,
    DistanceUnit::KILOMETER,
    DistanceUnit::INCH,
    DistanceUnit::FOOT,
    DistanceUnit::YARD,
    DistanceUnit::MILE,
    DistanceUnit::NAUTICAL_MILE,
];

impl QuantityUnit for DistanceUnit {
    #[inline]
    fn unit(self) -> Unit {
        self.0
    }

    fn catalog() -> &'static [Self] {
        &CATALOG
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// DISTANCE
// ============================================================================

/// A non-negative length, held in meters.
///
/// Two distances are equal when their meter values are bitwise equal, no
/// matter which unit they were created in:
///
/// ```
/// use quantities_core::units::Distance;
///
/// assert_eq!(Distance::of_meter(1.0)?, Distance::of_millimeter(1000.0)?);
/// assert_eq!(Distance::of_meter(2.0)?.to_string(), "2.000000 m");
/// # Ok::<(), quantities_core::QuantityError>(())
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Distance(f64);

impl Distance {
    /// Zero length.
    pub const ZERO: Distance = Distance(0.0);

    /// Build from a meter value known to be non-negative.
    #[inline]
    pub(crate) const fn from_meters_unchecked(meters: f64) -> Self {
        Distance(meters)
    }

    fn from_meters(meters: f64) -> Result<Self> {
        if meters < 0.0 {
            debug!(meters, "distance rejected: negative value");
            return Err(QuantityError::invalid_argument(format!(
                "Distance must not be negative, got {meters} m."
            )));
        }
        Ok(Distance(canonical(meters)))
    }

    /// Create a distance of `value` in `unit`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the value converts to a negative length.
    pub fn of(value: f64, unit: DistanceUnit) -> Result<Self> {
        Self::from_meters(unit.unit().to_base(value))
    }

    /// Create a distance of `value` nanometers.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_nanometer(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::NANOMETER)
    }

    /// Create a distance of `value` micrometers.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_micrometer(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::MICROMETER)
    }

    /// Create a distance of `value` millimeters.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_millimeter(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::MILLIMETER)
    }

    /// Create a distance of `value` centimeters.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_centimeter(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::CENTIMETER)
    }

    /// Create a distance of `value` decimeters.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_decimeter(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::DECIMETER)
    }

    /// Create a distance of `value` meters.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_meter(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::METER)
    }

    /// Create a distance of `value` decameters.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_decameter(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::DECAMETER)
    }

    /// Create a distance of `value` hectometers.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_hectometer(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::HECTOMETER)
    }

    /// Create a distance of `value` kilometers.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_kilometer(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::KILOMETER)
    }

    /// Create a distance of `value` inches.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_inch(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::INCH)
    }

    /// Create a distance of `value` feet.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_foot(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::FOOT)
    }

    /// Create a distance of `value` yards.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_yard(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::YARD)
    }

    /// Create a distance of `value` miles.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_mile(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::MILE)
    }

    /// Create a distance of `value` nautical miles.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is negative.
    pub fn of_nautical_mile(value: f64) -> Result<Self> {
        Self::of(value, DistanceUnit::NAUTICAL_MILE)
    }

    /// `self - other`. Requires `self >= other`; a `NaN` operand yields `NaN`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `other` is longer than `self`.
    pub fn subtract(self, other: Distance) -> Result<Distance> {
        if other.0 > self.0 {
            debug!(
                minuend = self.0,
                subtrahend = other.0,
                "distance subtraction rejected: negative result"
            );
            return Err(QuantityError::invalid_argument(format!(
                "Cannot subtract {other} from {self}: result would be negative."
            )));
        }
        Self::from_meters(self.0 - other.0)
    }

    /// Scale by a non-negative factor.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `factor` is negative.
    pub fn multiply(self, factor: f64) -> Result<Distance> {
        if factor < 0.0 {
            debug!(factor, "distance multiplication rejected: negative factor");
            return Err(QuantityError::invalid_argument(
                "Factors for Distance multiplication must not be negative.",
            ));
        }
        Ok(self.scaled(factor))
    }

    /// Divide by a non-negative divisor. Dividing by zero yields an infinite
    /// distance (or `NaN` for zero over zero).
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `divisor` is negative, or is `-0.0` with a
    /// non-zero distance (which would produce negative infinity).
    pub fn divide(self, divisor: f64) -> Result<Distance> {
        if divisor < 0.0 {
            debug!(divisor, "distance division rejected: negative divisor");
            return Err(QuantityError::invalid_argument(
                "Divisors for Distance division must not be negative.",
            ));
        }
        Self::from_meters(self.0 / divisor)
    }

    /// Multiplication for factors already known to be non-negative.
    #[inline]
    pub(crate) fn scaled(self, factor: f64) -> Distance {
        Distance(canonical(self.0 * factor))
    }

    /// Length in nanometers.
    pub fn get_nanometer(&self) -> f64 {
        self.get(DistanceUnit::NANOMETER)
    }

    /// Length in micrometers.
    pub fn get_micrometer(&self) -> f64 {
        self.get(DistanceUnit::MICROMETER)
    }

    /// Length in millimeters.
    pub fn get_millimeter(&self) -> f64 {
        self.get(DistanceUnit::MILLIMETER)
    }

    /// Length in centimeters.
    pub fn get_centimeter(&self) -> f64 {
        self.get(DistanceUnit::CENTIMETER)
    }

    /// Length in decimeters.
    pub fn get_decimeter(&self) -> f64 {
        self.get(DistanceUnit::DECIMETER)
    }

    /// Length in meters.
    pub fn get_meter(&self) -> f64 {
        self.get(DistanceUnit::METER)
    }

    /// Length in decameters.
    pub fn get_decameter(&self) -> f64 {
        self.get(DistanceUnit::DECAMETER)
    }

    /// Length in hectometers.
    pub fn get_hectometer(&self) -> f64 {
        self.get(DistanceUnit::HECTOMETER)
    }

    /// Length in kilometers.
    pub fn get_kilometer(&self) -> f64 {
        self.get(DistanceUnit::KILOMETER)
    }

    /// Length in inches.
    pub fn get_inch(&self) -> f64 {
        self.get(DistanceUnit::INCH)
    }

    /// Length in feet.
    pub fn get_foot(&self) -> f64 {
        self.get(DistanceUnit::FOOT)
    }

    /// Length in yards.
    pub fn get_yard(&self) -> f64 {
        self.get(DistanceUnit::YARD)
    }

    /// Length in miles.
    pub fn get_mile(&self) -> f64 {
        self.get(DistanceUnit::MILE)
    }

    /// Length in nautical miles.
    pub fn get_nautical_mile(&self) -> f64 {
        self.get(DistanceUnit::NAUTICAL_MILE)
    }
}

impl PhysicalQuantity for Distance {
    type Unit = DistanceUnit;

    const BASE_UNIT: DistanceUnit = DistanceUnit::METER;

    #[inline]
    fn base_value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Hash for Distance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::ZERO
    }
}

// Sum of two non-negative lengths is never negative, so `+` is infallible.
impl Add for Distance {
    type Output = Distance;
    fn add(self, rhs: Distance) -> Distance {
        Distance(canonical(self.0 + rhs.0))
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Distance {
        iter.fold(Distance::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Distance> for Distance {
    fn sum<I: Iterator<Item = &'a Distance>>(iter: I) -> Distance {
        iter.copied().sum()
    }
}

impl TryFrom<f64> for Distance {
    type Error = QuantityError;

    /// Interpret `meters` as a length in meters.
    fn try_from(meters: f64) -> Result<Self> {
        Distance::from_meters(meters)
    }
}

impl From<Distance> for f64 {
    fn from(d: Distance) -> f64 {
        d.0
    }
}

impl FromStr for Distance {
    type Err = QuantityError;

    /// Parse `"<value> <sign>"`, e.g. `"6371 km"`.
    fn from_str(s: &str) -> Result<Self> {
        let (value, unit) = parse_quantity::<DistanceUnit>(s)?;
        Distance::of(value, unit)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_in(Self::BASE_UNIT))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DELTA: f64 = 1e-7;

    #[test]
    fn test_two_meters_in_decimal_units() {
        let d = Distance::of_meter(2.0).unwrap();
        assert_relative_eq!(d.get_millimeter(), 2000.0, epsilon = DELTA);
        assert_relative_eq!(d.get_centimeter(), 200.0, epsilon = DELTA);
        assert_relative_eq!(d.get_decimeter(), 20.0, epsilon = DELTA);
        assert_relative_eq!(d.get_meter(), 2.0, epsilon = DELTA);
        assert_relative_eq!(d.get_decameter(), 0.2, epsilon = DELTA);
        assert_relative_eq!(d.get_hectometer(), 0.02, epsilon = DELTA);
        assert_relative_eq!(d.get_kilometer(), 0.002, epsilon = DELTA);
    }

    #[test]
    fn test_display_and_format_in() {
        let d = Distance::of_meter(2.0).unwrap();
        assert_eq!(d.to_string(), "2.000000 m");
        assert_eq!(d.format_in(DistanceUnit::CENTIMETER), "200.000000 cm");
        assert_eq!(d.format_in(DistanceUnit::KILOMETER), "0.002000 km");
    }

    #[test]
    fn test_equality_ignores_construction_unit() {
        assert_eq!(Distance::of_meter(1.0).unwrap(), Distance::of_millimeter(1000.0).unwrap());
        assert_eq!(Distance::of_meter(2.0).unwrap(), Distance::of_centimeter(200.0).unwrap());
        assert_eq!(Distance::of_kilometer(1.5).unwrap(), Distance::of_meter(1500.0).unwrap());
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        let neg = Distance::of_meter(-0.0).unwrap();
        assert_eq!(neg, Distance::ZERO);
        assert_eq!(neg.base_value().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_negative_construction_rejected() {
        assert!(Distance::of_meter(-1.0).is_err());
        assert!(Distance::of_mile(-0.5).is_err());
        assert!(Distance::try_from(-3.0).is_err());
    }

    #[test]
    fn test_customary_units() {
        let d = Distance::of_nautical_mile(1.0).unwrap();
        assert_eq!(d.get_meter(), 1852.0);
        assert_relative_eq!(Distance::of_inch(39.37).unwrap().get_meter(), 1.0);
        assert_relative_eq!(Distance::of_foot(3.2808).unwrap().get_meter(), 1.0);
        assert_relative_eq!(Distance::of_yard(1.0936).unwrap().get_meter(), 1.0);
        assert_relative_eq!(Distance::of_mile(1.0).unwrap().get_kilometer(), 1.609347, epsilon = 1e-6);
    }

    #[test]
    fn test_add_and_sum() {
        let a = Distance::of_meter(1.5).unwrap();
        let b = Distance::of_centimeter(50.0).unwrap();
        assert_eq!(a + b, Distance::of_meter(2.0).unwrap());
        assert_eq!(a + Distance::ZERO, a);

        let total: Distance = [a, b, a].iter().sum();
        assert_relative_eq!(total.get_meter(), 3.5);
        assert_eq!(Vec::<Distance>::new().into_iter().sum::<Distance>(), Distance::ZERO);
    }

    #[test]
    fn test_subtract() {
        let a = Distance::of_meter(3.0).unwrap();
        let b = Distance::of_meter(1.0).unwrap();
        assert_eq!(a.subtract(b).unwrap(), Distance::of_meter(2.0).unwrap());
        assert_eq!(a.subtract(a).unwrap(), Distance::ZERO);
        assert!(b.subtract(a).is_err());
        // Operands are untouched.
        assert_eq!(a.get_meter(), 3.0);
        assert_eq!(b.get_meter(), 1.0);
    }

    #[test]
    fn test_subtract_nan_propagates() {
        let nan = Distance::ZERO.divide(0.0).unwrap();
        let d = Distance::of_meter(3.0).unwrap();
        assert!(d.subtract(nan).unwrap().get_meter().is_nan());
        assert!(nan.subtract(d).unwrap().get_meter().is_nan());
    }

    #[test]
    fn test_multiply_and_divide() {
        let d = Distance::of_meter(4.0).unwrap();
        assert_eq!(d.multiply(1.0).unwrap(), d);
        assert_eq!(d.divide(1.0).unwrap(), d);
        assert_eq!(d.multiply(2.5).unwrap().get_meter(), 10.0);
        assert_eq!(d.divide(8.0).unwrap().get_meter(), 0.5);
        assert_eq!(d.multiply(-0.0).unwrap(), Distance::ZERO);
    }

    #[test]
    fn test_negative_factor_and_divisor_rejected() {
        let d = Distance::of_meter(1.0).unwrap();
        let err = d.multiply(-1.0).unwrap_err();
        assert_eq!(
            err.message(),
            "Factors for Distance multiplication must not be negative."
        );
        assert!(d.divide(-1.0).is_err());
        assert!(d.divide(-0.0).is_err());
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        let d = Distance::of_meter(1.0).unwrap();
        assert!(d.divide(0.0).unwrap().get_meter().is_infinite());
        assert!(Distance::ZERO.divide(0.0).unwrap().get_meter().is_nan());
    }

    #[test]
    fn test_zero_over_zero_sorts_above_every_length() {
        let nan = Distance::ZERO.divide(0.0).unwrap();
        assert!(nan.is_greater(&Distance::ZERO));
        assert!(nan.is_greater(&Distance::of_meter(1.0).unwrap().divide(0.0).unwrap()));
        assert_eq!(nan, Distance::of_meter(f64::NAN).unwrap());
        assert_eq!(nan.base_value().to_bits(), f64::NAN.to_bits());
    }

    #[test]
    fn test_builder_unit_wrapped_as_distance_unit() {
        let furlong = DistanceUnit::new(
            Unit::builder("fur")
                .with_to_base(|v| v * 201.168)
                .with_from_base(|v| v / 201.168)
                .build()
                .unwrap(),
        );
        let d = Distance::of(1.0, furlong).unwrap();
        assert_relative_eq!(d.get_meter(), 201.168);
        assert_relative_eq!(d.get(furlong), 1.0);
        assert_eq!(d.format_in(furlong), "1.000000 fur");
        assert_eq!(furlong.to_string(), "fur");
        assert!(Distance::of(-1.0, furlong).is_err());
        assert!(DistanceUnit::from_sign("fur").is_none());
    }

    #[test]
    fn test_comparisons() {
        let short = Distance::of_meter(1.0).unwrap();
        let long = Distance::of_kilometer(1.0).unwrap();
        assert!(long.is_greater(&short));
        assert!(long.is_greater_or_equal(&short));
        assert!(long.is_greater_or_equal(&long));
        assert!(short.is_less(&long));
        assert!(short.is_less_or_equal(&short));
        assert!(!short.is_greater(&short));
        assert_eq!(short.max(long), long);
    }

    #[test]
    fn test_parse() {
        let d: Distance = "2.5 km".parse().unwrap();
        assert_eq!(d, Distance::of_meter(2500.0).unwrap());
        assert_eq!(" 12 nmi ".parse::<Distance>().unwrap().get_nautical_mile(), 12.0);
        assert!("2.5".parse::<Distance>().is_err());
        assert!("abc km".parse::<Distance>().is_err());
        assert!("2.5 furlong".parse::<Distance>().is_err());
        assert!("-1 m".parse::<Distance>().is_err());
    }

    #[test]
    fn test_from_sign_covers_catalog() {
        for unit in DistanceUnit::catalog() {
            let found = DistanceUnit::from_sign(unit.unit().sign()).unwrap();
            assert_eq!(found.to_string(), unit.to_string());
        }
        assert!(DistanceUnit::from_sign("NM").is_none());
    }
}
