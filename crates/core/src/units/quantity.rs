//! Generic scalar quantity behaviour shared by [`Distance`](super::Distance)
//! and [`Temperature`](super::Temperature).
//!
//! A quantity kind stores one `f64` in its SI base unit. Adding a new kind
//! means picking a base unit, declaring a unit catalog that implements
//! [`QuantityUnit`], and implementing [`PhysicalQuantity`]; conversion,
//! formatting and comparisons then come from the provided methods here.

use std::cmp::Ordering;

use tracing::debug;

use super::unit::Unit;
use crate::error::{QuantityError, Result};

/// Compare base values with a total order (positive `NaN` sorts above everything).
#[inline]
pub(crate) fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Fold `-0.0` into `+0.0` and every `NaN` payload into the positive quiet
/// `NaN`, so all `NaN`s are equal and sort above every other value.
#[inline]
pub(crate) fn canonical(base_value: f64) -> f64 {
    if base_value.is_nan() {
        f64::NAN
    } else {
        base_value + 0.0
    }
}

/// A catalog unit belonging to one quantity kind.
///
/// Wrapping [`Unit`] per kind keeps a temperature unit from being passed to a
/// distance.
pub trait QuantityUnit: Copy + 'static {
    /// The underlying sign and conversion.
    fn unit(self) -> Unit;

    /// Every predefined unit of this kind.
    fn catalog() -> &'static [Self];

    /// Look up a catalog unit by its exact sign.
    fn from_sign(sign: &str) -> Option<Self> {
        Self::catalog()
            .iter()
            .copied()
            .find(|u| u.unit().sign() == sign)
    }
}

/// Scalar quantity held in a canonical SI base unit.
///
/// Equality and ordering are defined on the base value only, never on the
/// unit the value was created with.
pub trait PhysicalQuantity: Copy + Ord {
    type Unit: QuantityUnit;

    /// Unit used by `Display`.
    const BASE_UNIT: Self::Unit;

    /// Value in the base unit.
    fn base_value(&self) -> f64;

    /// Value expressed in `unit`.
    fn get(&self, unit: Self::Unit) -> f64 {
        unit.unit().to_unit(self.base_value())
    }

    /// Render the value in `unit` with six decimals and the unit sign.
    fn format_in(&self, unit: Self::Unit) -> String {
        unit.unit().format(self.base_value())
    }

    /// Strictly greater than `other`.
    fn is_greater(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Greater than or equal to `other`.
    fn is_greater_or_equal(&self, other: &Self) -> bool {
        self.cmp(other) != Ordering::Less
    }

    /// Strictly less than `other`.
    fn is_less(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Less than or equal to `other`.
    fn is_less_or_equal(&self, other: &Self) -> bool {
        self.cmp(other) != Ordering::Greater
    }
}

/// Split `"<number> <sign>"` into a value and a catalog unit of kind `U`.
///
/// # Errors
/// Returns `InvalidArgument` when the text has no sign, the number does not
/// parse, or the sign is not in `U`'s catalog.
pub fn parse_quantity<U: QuantityUnit>(text: &str) -> Result<(f64, U)> {
    let text = text.trim();
    let Some((number, sign)) = text.split_once(char::is_whitespace) else {
        debug!(text, "quantity rejected: missing unit sign");
        return Err(QuantityError::invalid_argument(format!(
            "Expected '<value> <unit>', got '{text}'."
        )));
    };

    let value: f64 = number.parse().map_err(|_| {
        debug!(number, "quantity rejected: invalid number");
        QuantityError::invalid_argument(format!("Invalid number '{number}'."))
    })?;

    let sign = sign.trim();
    let unit = U::from_sign(sign).ok_or_else(|| {
        debug!(sign, "quantity rejected: unknown unit");
        QuantityError::invalid_argument(format!("Unknown unit '{sign}'."))
    })?;

    Ok((value, unit))
}
