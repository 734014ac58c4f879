//! Named conversions between a display unit and a quantity's SI base unit.
//!
//! A [`Unit`] pairs a display sign (`"km"`, `"°C"`) with a [`Conversion`].
//! Units are `Copy` and can be built in const context, so each quantity keeps
//! its catalog as a set of associated constants.

use std::fmt;

use tracing::debug;

use super::scale::DecimalScale;
use crate::error::{QuantityError, Result};
use crate::util::{has_text, require};

/// Plain conversion function from one scalar representation to another.
pub type ConversionFn = fn(f64) -> f64;

/// How a unit maps to and from its base unit.
#[derive(Debug, Clone, Copy)]
pub enum Conversion {
    /// The unit is the base unit.
    Identity,
    /// Pure power-of-ten scaling with no offset.
    Scaled(DecimalScale),
    /// Arbitrary pair of mutually inverse functions (offsets, empirical factors).
    Functions {
        to_base: ConversionFn,
        from_base: ConversionFn,
    },
}

impl Conversion {
    /// Convert a value expressed in the unit into the base unit.
    #[inline]
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Conversion::Identity => value,
            Conversion::Scaled(scale) => scale.multiply(value),
            Conversion::Functions { to_base, .. } => to_base(value),
        }
    }

    /// Convert a base-unit value into the unit.
    #[inline]
    pub fn to_unit(self, base_value: f64) -> f64 {
        match self {
            Conversion::Identity => base_value,
            Conversion::Scaled(scale) => scale.divide(base_value),
            Conversion::Functions { from_base, .. } => from_base(base_value),
        }
    }
}

/// A display sign plus its conversion to the base unit.
#[derive(Debug, Clone, Copy)]
pub struct Unit {
    sign: &'static str,
    conversion: Conversion,
}

impl Unit {
    /// Const constructor for catalog entries whose signs are known to be valid.
    pub(crate) const fn from_parts(sign: &'static str, conversion: Conversion) -> Self {
        Unit { sign, conversion }
    }

    /// Create a base unit (identity conversion).
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `sign` is empty or whitespace.
    pub fn base(sign: &'static str) -> Result<Self> {
        Ok(Unit::from_parts(checked_sign(sign)?, Conversion::Identity))
    }

    /// Create a unit that differs from the base unit by a decimal prefix.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `sign` is empty or whitespace.
    pub fn scaled(sign: &'static str, scale: DecimalScale) -> Result<Self> {
        Ok(Unit::from_parts(checked_sign(sign)?, Conversion::Scaled(scale)))
    }

    /// Start building a unit with custom conversion functions.
    pub fn builder(sign: &'static str) -> UnitBuilder {
        UnitBuilder {
            sign,
            to_base: None,
            from_base: None,
        }
    }

    /// Display sign, e.g. `"km"`.
    #[inline]
    pub fn sign(self) -> &'static str {
        self.sign
    }

    /// Mapping between this unit and the base unit.
    #[inline]
    pub fn conversion(self) -> Conversion {
        self.conversion
    }

    /// Convert `value`, expressed in this unit, into the base unit.
    #[inline]
    pub fn to_base(self, value: f64) -> f64 {
        self.conversion.to_base(value)
    }

    /// Convert a base-unit value into this unit.
    #[inline]
    pub fn to_unit(self, base_value: f64) -> f64 {
        self.conversion.to_unit(base_value)
    }

    /// Render a base-unit value in this unit with six decimals: `"0.002000 km"`.
    pub fn format(self, base_value: f64) -> String {
        format!("{:.6} {}", self.to_unit(base_value), self.sign)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sign)
    }
}

/// Builder for units defined by a pair of conversion functions.
///
/// ```
/// use quantities_core::units::Unit;
///
/// let double = Unit::builder("dbl")
///     .with_to_base(|v| v * 2.0)
///     .with_from_base(|v| v / 2.0)
///     .build()
///     .unwrap();
/// assert_eq!(double.to_base(5.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnitBuilder {
    sign: &'static str,
    to_base: Option<ConversionFn>,
    from_base: Option<ConversionFn>,
}

impl UnitBuilder {
    /// Function converting a value in the new unit to the base unit.
    pub fn with_to_base(mut self, to_base: ConversionFn) -> Self {
        self.to_base = Some(to_base);
        self
    }

    /// Function converting a base-unit value to the new unit.
    pub fn with_from_base(mut self, from_base: ConversionFn) -> Self {
        self.from_base = Some(from_base);
        self
    }

    /// Finish the unit.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the sign is empty or either conversion
    /// function was never supplied.
    pub fn build(self) -> Result<Unit> {
        let sign = checked_sign(self.sign)?;
        let to_base = require(self.to_base, "to_base function must not be missing.")
            .inspect_err(|_| debug!(sign, "unit rejected: missing to_base function"))?;
        let from_base = require(self.from_base, "from_base function must not be missing.")
            .inspect_err(|_| debug!(sign, "unit rejected: missing from_base function"))?;
        Ok(Unit::from_parts(sign, Conversion::Functions { to_base, from_base }))
    }
}

fn checked_sign(sign: &'static str) -> Result<&'static str> {
    if has_text(sign) {
        Ok(sign)
    } else {
        debug!(sign, "unit rejected: empty sign");
        Err(QuantityError::invalid_argument("Sign must not be empty."))
    }
}
