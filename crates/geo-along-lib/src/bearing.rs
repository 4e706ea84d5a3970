//! Initial and final bearings along great circles

use crate::GeoPoint;

/// Initial bearing from `a` toward `b`, in degrees clockwise from true north
///
/// The result lies in (-180, 180]. The direction is undefined when `a == b`;
/// callers must not ask for the bearing of a zero-length segment.
#[inline]
pub fn bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    let lon1 = a.x().to_radians();
    let lon2 = b.x().to_radians();
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();

    let y = (lon2 - lon1).sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lon2 - lon1).cos();

    normalize(y.atan2(x).to_degrees())
}

/// Bearing held on arrival at `b` when travelling from `a`, in (-180, 180]
pub fn final_bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    normalize(bearing(b, a) + 180.0)
}

/// Wrap an angle in degrees into (-180, 180]
#[inline]
pub(crate) fn normalize(degrees: f64) -> f64 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 { 180.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_cardinal_bearings() {
        let origin = Point::new(0.0, 0.0);
        assert!((bearing(origin, Point::new(0.0, 1.0)) - 0.0).abs() < EPS);
        assert!((bearing(origin, Point::new(1.0, 0.0)) - 90.0).abs() < EPS);
        assert!((bearing(origin, Point::new(0.0, -1.0)) - 180.0).abs() < EPS);
        assert!((bearing(origin, Point::new(-1.0, 0.0)) + 90.0).abs() < EPS);
    }

    #[test]
    fn test_bearing_range() {
        // A negative-zero longitude delta makes atan2 land on -180
        let due_south = bearing(Point::new(0.0, 10.0), Point::new(-0.0, 5.0));
        assert_eq!(due_south, 180.0);

        let due_south = bearing(Point::new(-0.0, 10.0), Point::new(0.0, 5.0));
        assert_eq!(due_south, 180.0);

        for (lon, lat) in [(-1.0, -1.0), (1.0, -1.0), (-179.0, 0.0), (179.0, 0.0), (0.0, -89.0)] {
            let value = bearing(Point::new(0.0, 0.0), Point::new(lon, lat));
            assert!(value > -180.0 && value <= 180.0, "{value}");
        }
    }

    #[test]
    fn test_bearing_known_value() {
        let start = Point::new(-75.0, 45.0);
        let end = Point::new(20.0, 60.0);
        assert!((bearing(start, end) - 37.754_958_526).abs() < 1e-6);
    }

    #[test]
    fn test_final_bearing() {
        let start = Point::new(-75.0, 45.0);
        let end = Point::new(20.0, 60.0);
        let value = final_bearing(start, end);
        assert!(value > -180.0 && value <= 180.0);
        // Heading east across the north Atlantic ends pointing south of east
        assert!(value > 90.0 && value < 180.0, "{value}");

        // Along a meridian the heading never changes
        let north = final_bearing(Point::new(10.0, 0.0), Point::new(10.0, 45.0));
        assert!(north.abs() < EPS);
    }

    #[test]
    fn test_normalize() {
        assert!((normalize(190.0) + 170.0).abs() < EPS);
        assert!((normalize(-190.0) - 170.0).abs() < EPS);
        assert_eq!(normalize(-180.0), 180.0);
        assert_eq!(normalize(540.0), 180.0);
        assert!((normalize(45.0) - 45.0).abs() < EPS);
    }
}
