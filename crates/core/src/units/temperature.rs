//! Absolute temperatures stored in kelvin.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::quantity::{canonical, f64_total_cmp, parse_quantity, PhysicalQuantity, QuantityUnit};
use super::unit::{Conversion, Unit};
use crate::error::{QuantityError, Result};

/// Celsius to Kelvin conversion offset (0°C = 273.15 K)
const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

fn celsius_to_kelvin(v: f64) -> f64 {
    v + CELSIUS_KELVIN_OFFSET
}

fn kelvin_to_celsius(v: f64) -> f64 {
    v - CELSIUS_KELVIN_OFFSET
}

fn fahrenheit_to_kelvin(v: f64) -> f64 {
    celsius_to_kelvin((v - 32.0) * 5.0 / 9.0)
}

fn kelvin_to_fahrenheit(v: f64) -> f64 {
    kelvin_to_celsius(v) * (9.0 / 5.0) + 32.0
}

/// A temperature scale, converting to and from kelvin.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureUnit(Unit);

impl TemperatureUnit {
    /// SI base unit of temperature.
    pub const KELVIN: TemperatureUnit = TemperatureUnit(Unit::from_parts("K", Conversion::Identity));
    /// Kelvin shifted by 273.15.
    pub const DEGREES_CELSIUS: TemperatureUnit = TemperatureUnit(Unit::from_parts(
        "°C",
        Conversion::Functions {
            to_base: celsius_to_kelvin,
            from_base: kelvin_to_celsius,
        },
    ));
    /// Fahrenheit scale, converted through Celsius.
    pub const DEGREES_FAHRENHEIT: TemperatureUnit = TemperatureUnit(Unit::from_parts(
        "°F",
        Conversion::Functions {
            to_base: fahrenheit_to_kelvin,
            from_base: kelvin_to_fahrenheit,
        },
    ));

    /// Wrap a user-defined [`Unit`] whose base is the kelvin.
    pub const fn new(unit: Unit) -> Self {
        TemperatureUnit(unit)
    }
}

static CATALOG: [TemperatureUnit; 3] = [
    TemperatureUnit::KELVIN,
    TemperatureUnit::DEGREES_CELSIUS,
    TemperatureUnit::DEGREES_FAHRENHEIT,
];

impl QuantityUnit for TemperatureUnit {
    #[inline]
    fn unit(self) -> Unit {
        self.0
    }

    fn catalog() -> &'static [Self] {
        &CATALOG
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Temperature held in kelvin.
///
/// No lower bound is enforced; values below absolute zero are representable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Temperature(f64);

impl Temperature {
    /// 0 K
    pub const ABSOLUTE_ZERO: Temperature = Temperature(0.0);

    /// Create a temperature of `value` in `unit`.
    pub fn of(value: f64, unit: TemperatureUnit) -> Self {
        Temperature(canonical(unit.unit().to_base(value)))
    }

    /// Create a temperature of `value` kelvin.
    pub fn of_kelvin(value: f64) -> Self {
        Self::of(value, TemperatureUnit::KELVIN)
    }

    /// Create a temperature of `value` degrees Celsius.
    pub fn of_degrees_celsius(value: f64) -> Self {
        Self::of(value, TemperatureUnit::DEGREES_CELSIUS)
    }

    /// Create a temperature of `value` degrees Fahrenheit.
    pub fn of_degrees_fahrenheit(value: f64) -> Self {
        Self::of(value, TemperatureUnit::DEGREES_FAHRENHEIT)
    }

    /// Temperature in kelvin.
    pub fn get_kelvin(&self) -> f64 {
        self.get(TemperatureUnit::KELVIN)
    }

    /// Temperature in degrees Celsius.
    pub fn get_degrees_celsius(&self) -> f64 {
        self.get(TemperatureUnit::DEGREES_CELSIUS)
    }

    /// Temperature in degrees Fahrenheit.
    pub fn get_degrees_fahrenheit(&self) -> f64 {
        self.get(TemperatureUnit::DEGREES_FAHRENHEIT)
    }
}

impl PhysicalQuantity for Temperature {
    type Unit = TemperatureUnit;

    const BASE_UNIT: TemperatureUnit = TemperatureUnit::KELVIN;

    #[inline]
    fn base_value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Temperature {}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Temperature {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Hash for Temperature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Temperature {
    /// Interpret `kelvin` as a temperature in kelvin.
    fn from(kelvin: f64) -> Self {
        Temperature::of_kelvin(kelvin)
    }
}

impl From<Temperature> for f64 {
    fn from(t: Temperature) -> f64 {
        t.0
    }
}

impl FromStr for Temperature {
    type Err = QuantityError;

    /// Parse `"<value> <sign>"`, e.g. `"21.5 °C"`.
    fn from_str(s: &str) -> Result<Self> {
        let (value, unit) = parse_quantity::<TemperatureUnit>(s)?;
        Ok(Temperature::of(value, unit))
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_in(Self::BASE_UNIT))
    }
}
