//! Unit-safe scalar quantities and geodesic distance.
//!
//! Quantities keep a single `f64` in their SI base unit (meters for
//! [`Distance`], kelvin for [`Temperature`]) and convert to any unit of their
//! catalog on demand. Equality and ordering never depend on the unit a value
//! was created with.
//!
//! ## Modules
//! - [`units`]: decimal prefixes, units, and the quantity kinds
//! - [`geo`]: latitude/longitude points and the haversine formula
//! - [`constants`]: reference constants such as the mean Earth radius
//!
//! ```
//! use quantities_core::{haversine_distance, Distance, LatLng, PhysicalQuantity};
//!
//! let leg = haversine_distance(LatLng::new(49.654321, 8.654321), LatLng::new(49.123456, 8.123456));
//! assert!(leg.is_greater(&Distance::of_kilometer(70.0)?));
//! # Ok::<(), quantities_core::QuantityError>(())
//! ```

pub mod constants;
pub mod error;
pub mod geo;
pub mod units;
pub mod util;

pub use constants::MEAN_EARTH_RADIUS;
pub use error::{QuantityError, Result};
pub use geo::{distance_between, great_circle_distance, haversine_distance, LatLng};
pub use units::{
    DecimalScale, Distance, DistanceUnit, PhysicalQuantity, QuantityUnit, Temperature,
    TemperatureUnit, Unit,
};
