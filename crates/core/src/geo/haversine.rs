//! Great-circle distance with the haversine formula.
//!
//! `hav(θ) = sin²(θ/2)`; for two points with latitudes φ₁, φ₂ and a
//! longitude difference Δλ:
//!
//! ```text
//! a = hav(Δφ) + cos φ₁ · cos φ₂ · hav(Δλ)
//! c = 2 · atan2(√a, √(1 − a))
//! d = R · c
//! ```
//!
//! The result is symmetric in its two points and zero for identical points.

use tracing::trace;

use super::coordinate::LatLng;
use crate::constants::MEAN_EARTH_RADIUS;
use crate::units::Distance;

#[inline]
fn haversin(angle: f64) -> f64 {
    (angle / 2.0).sin().powi(2)
}

/// Great-circle distance between two points on a sphere of the given radius.
pub fn great_circle_distance(start: LatLng, end: LatLng, radius: Distance) -> Distance {
    let start = start.radians();
    let end = end.radians();

    let d_lat = end.latitude - start.latitude;
    let d_lng = end.longitude - start.longitude;

    let a = haversin(d_lat) + start.latitude.cos() * end.latitude.cos() * haversin(d_lng);
    // Rounding can push `a` a hair past 1 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);
    let central_angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    trace!(central_angle, "haversine central angle");

    // atan2 of two non-negative arguments lies in [0, π/2], so the angle is non-negative.
    radius.scaled(central_angle)
}

/// Great-circle distance over the mean Earth radius.
///
/// ```
/// use quantities_core::geo::{haversine_distance, LatLng};
///
/// let d = haversine_distance(LatLng::new(49.654321, 8.654321), LatLng::new(49.123456, 8.123456));
/// assert!((d.get_meter() - 70432.888669).abs() < 0.001);
/// ```
pub fn haversine_distance(start: LatLng, end: LatLng) -> Distance {
    great_circle_distance(start, end, MEAN_EARTH_RADIUS)
}

/// [`haversine_distance`] on raw latitude/longitude degrees.
pub fn distance_between(lat_start: f64, lng_start: f64, lat_end: f64, lng_end: f64) -> Distance {
    haversine_distance(LatLng::new(lat_start, lng_start), LatLng::new(lat_end, lng_end))
}
