use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Anything that can be read as a geodetic coordinate in degrees.
///
/// Tuples and arrays are read in `(lat, lng)` order. `geo_types::Point`
/// follows GIS convention, so `x` is the longitude and `y` the latitude.
pub trait Coordinate {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 { self.0 }
    fn lng(&self) -> f64 { self.1 }
}

impl Coordinate for [f64; 2] {
    fn lat(&self) -> f64 { self[0] }
    fn lng(&self) -> f64 { self[1] }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 { self.y() }
    fn lng(&self) -> f64 { self.x() }
}

/// A latitude/longitude pair in degrees.
///
/// Values are not range checked; out-of-range input wraps geometrically
/// when encoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Rounds both components to `decimals` places.
    pub fn rounded(&self, decimals: i32) -> Self {
        let factor = 10f64.powi(decimals);
        Self {
            lat: (self.lat * factor).round() / factor,
            lng: (self.lng * factor).round() / factor,
        }
    }

    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl Coordinate for LatLng {
    fn lat(&self) -> f64 { self.lat }
    fn lng(&self) -> f64 { self.lng }
}

impl From<LatLng> for Point<f64> {
    fn from(ll: LatLng) -> Self {
        ll.to_point()
    }
}

impl<C: Coordinate> From<&C> for LatLng {
    fn from(coord: &C) -> Self {
        Self::new(coord.lat(), coord.lng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (43.6, 3.9);
        assert_eq!(tuple.lat(), 43.6);
        assert_eq!(tuple.lng(), 3.9);
    }

    #[test]
    fn test_coordinate_trait_point_is_lng_lat() {
        let point = Point::new(3.9, 43.6);
        assert_eq!(point.lat(), 43.6);
        assert_eq!(point.lng(), 3.9);
    }

    #[test]
    fn test_same_result_tuple_array_and_point() {
        let from_tuple = LatLng::from(&(43.604448, 3.887772));
        let from_array = LatLng::from(&[43.604448, 3.887772]);
        let from_point = LatLng::from(&Point::new(3.887772, 43.604448));

        assert_eq!(from_tuple, from_array);
        assert_eq!(from_tuple, from_point);
    }

    #[test]
    fn test_rounded() {
        let ll = LatLng::new(43.604448067090445, 3.887771960583585).rounded(6);
        assert_eq!(ll, LatLng::new(43.604448, 3.887772));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&LatLng::new(1.5, -2.25)).unwrap();
        assert_eq!(json, r#"{"lat":1.5,"lng":-2.25}"#);
        let back: LatLng = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LatLng::new(1.5, -2.25));
    }
}
