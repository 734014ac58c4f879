//! Physical reference constants.

use crate::units::Distance;

/// Mean Earth radius (6371 km), the reference sphere for haversine distances.
pub const MEAN_EARTH_RADIUS: Distance = Distance::from_meters_unchecked(6_371_000.0);
