//! Geographic coordinates in degrees.

use serde::{Deserialize, Serialize};

use super::haversine::haversine_distance;
use crate::units::Distance;

/// A point on the globe as latitude/longitude in degrees.
///
/// Ranges are not validated or wrapped; callers are responsible for keeping
/// latitude in `[-90, 90]` and longitude in `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    latitude: f64,
    longitude: f64,
}

impl LatLng {
    /// Point at `latitude`/`longitude` degrees, stored as given.
    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        LatLng {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Radian view of this point, recomputed on every call.
    #[inline]
    #[must_use]
    pub fn radians(&self) -> LatLngRadians {
        LatLngRadians {
            latitude: self.latitude.to_radians(),
            longitude: self.longitude.to_radians(),
        }
    }

    /// Great-circle distance to `other` over the mean Earth radius.
    pub fn distance_to(&self, other: &LatLng) -> Distance {
        haversine_distance(*self, *other)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        LatLng::new(latitude, longitude)
    }
}

/// Latitude/longitude of a [`LatLng`] in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngRadians {
    /// Latitude in radians
    pub latitude: f64,
    /// Longitude in radians
    pub longitude: f64,
}
