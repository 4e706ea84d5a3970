//! Destination point projection along a great circle

use crate::units::{self, Units};
use crate::GeoPoint;
use geo::Point;

/// Project a point `distance` units away from `origin` along the initial `bearing`
///
/// `bearing` is in degrees clockwise from north and may lie outside (-180, 180];
/// a negative `distance` travels the opposite way. The resulting longitude is
/// wrapped into [-180, 180].
#[inline]
pub fn destination(origin: GeoPoint, distance: f64, bearing: f64, units: Units) -> GeoPoint {
    let lon1 = origin.x().to_radians();
    let lat1 = origin.y().to_radians();
    let bearing_rad = bearing.to_radians();
    let delta = units::length_to_radians(distance, units);

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing_rad.cos()).asin();
    let lon2 = lon1
        + (bearing_rad.sin() * delta.sin() * lat1.cos())
            .atan2(delta.cos() - lat1.sin() * lat2.sin());

    Point::new(wrap_longitude(lon2.to_degrees()), lat2.to_degrees())
}

/// Wrap a longitude into [-180, 180], leaving in-range values untouched
#[inline]
fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}
