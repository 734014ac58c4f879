//! Scalar physical quantities and their unit catalogs.

pub mod distance;
pub mod quantity;
pub mod scale;
pub mod temperature;
pub mod unit;

pub use distance::{Distance, DistanceUnit};
pub use quantity::{parse_quantity, PhysicalQuantity, QuantityUnit};
pub use scale::DecimalScale;
pub use temperature::{Temperature, TemperatureUnit};
pub use unit::{Conversion, ConversionFn, Unit, UnitBuilder};
