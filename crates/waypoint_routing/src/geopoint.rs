use geo::{Distance as _, Haversine};
use serde::{Deserialize, Serialize};

use crate::distance::{Distance, Meters};

/// A latitude/longitude pair in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Great-circle distance on a spherical Earth (mean radius).
    pub fn haversine_distance(&self, other: &GeoPoint) -> Distance<Meters> {
        let meters = Haversine.distance(geo::Point::from(self), geo::Point::from(other));
        Distance::from(meters)
    }
}

impl From<&GeoPoint> for geo::Point<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo::Point::new(point.lng, point.lat)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        GeoPoint {
            lat: point.y(),
            lng: point.x(),
        }
    }
}
