//! Great-circle distance between two points

use crate::units::{self, Units};
use crate::GeoPoint;

/// Great-circle distance from `a` to `b` in `units`, using the Haversine formula
///
/// Symmetric, non-negative, and zero when both points are equal.
#[inline]
pub fn distance(a: GeoPoint, b: GeoPoint, units: Units) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lon = (b.x() - a.x()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + (delta_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    units::radians_to_length(c, units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Haversine, Point};

    #[test]
    fn test_distance_known_values() {
        let from = Point::new(-75.343, 39.984);
        let to = Point::new(-75.534, 39.123);

        assert!((distance(from, to, Units::Kilometers) - 97.129_221_19).abs() < 1e-6);
        assert!((distance(from, to, Units::Miles) - 60.353_299_97).abs() < 1e-6);
    }

    #[test]
    fn test_distance_one_degree_on_equator() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(1.0, 0.0);

        let radians = distance(from, to, Units::Radians);
        assert!((radians - 1f64.to_radians()).abs() < 1e-12);
        assert!((distance(from, to, Units::Kilometers) - 111.195_080_23).abs() < 1e-6);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(-83.0, 30.0);
        let b = Point::new(-78.0, 41.0);
        let forward = distance(a, b, Units::Kilometers);
        let backward = distance(b, a, Units::Kilometers);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_distance_zero_for_equal_points() {
        let a = Point::new(12.5, -45.25);
        assert_eq!(distance(a, a, Units::Miles), 0.0);
    }

    #[test]
    fn test_distance_matches_geo_haversine() {
        // geo uses the same mean earth radius, in meters
        let a = Point::new(-0.1278, 51.5074);
        let b = Point::new(2.3522, 48.8566);
        let ours = distance(a, b, Units::Meters);
        let theirs = Haversine.distance(a, b);
        assert!((ours - theirs).abs() < 1e-3, "{ours} vs {theirs}");
    }
}
