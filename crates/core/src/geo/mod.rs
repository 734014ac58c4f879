//! Geographic coordinates and great-circle distances.

pub mod coordinate;
pub mod haversine;

pub use coordinate::{LatLng, LatLngRadians};
pub use haversine::{distance_between, great_circle_distance, haversine_distance};
