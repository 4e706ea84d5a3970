//! Geographic points and validated polylines
//!
//! This module provides [`GeoPath`], the canonical path representation every
//! traversal runs against. Construction validates the coordinates once so the
//! traversal itself never has to.

use crate::{AlongError, Result, Units, distance};
use geo::{LineString, Point};

/// A `(longitude, latitude)` pair in decimal degrees (`x` = longitude, `y` = latitude)
pub type GeoPoint = Point<f64>;

/// Returns true when the point is finite and within longitude/latitude bounds
#[inline]
pub(crate) fn is_valid_point(point: &GeoPoint) -> bool {
    let (lon, lat) = point.x_y();
    lon.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lon)
        && (-90.0..=90.0).contains(&lat)
}

/// An ordered, non-empty sequence of points forming a polyline on the sphere
///
/// A single point is a legal (degenerate) path.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPath {
    points: Vec<GeoPoint>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl GeoPath {
    /// Create a new path from its points
    ///
    /// # Returns
    /// The path, or an error if there are no points or a coordinate is out of bounds
    pub fn new(points: Vec<GeoPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(AlongError::EmptyPath);
        }

        if let Some((index, point)) = points
            .iter()
            .enumerate()
            .find(|(_, point)| !is_valid_point(point))
        {
            tracing::warn!(
                "Rejecting coordinate outside longitude/latitude bounds: ({}, {})",
                point.x(),
                point.y()
            );
            return Err(AlongError::InvalidCoordinate {
                index,
                lon: point.x(),
                lat: point.y(),
            });
        }

        Ok(Self { points })
    }

    /// Create a new path from `(longitude, latitude)` pairs
    pub fn from_lon_lat(coords: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        Self::new(
            coords
                .into_iter()
                .map(|(lon, lat)| Point::new(lon, lat))
                .collect(),
        )
    }

    /// All points in path order
    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of points (always at least one)
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First point of the path
    #[inline]
    pub fn first(&self) -> GeoPoint {
        self.points[0]
    }

    /// Last point of the path
    #[inline]
    pub fn last(&self) -> GeoPoint {
        self.points[self.points.len() - 1]
    }

    /// Consecutive point pairs, one per segment
    pub fn segments(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Total great-circle length of the path in `units`
    pub fn length(&self, units: Units) -> f64 {
        self.segments()
            .fold(0.0, |length, (a, b)| length + distance(a, b, units))
    }

    /// Consume the path, returning its points
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

impl TryFrom<LineString<f64>> for GeoPath {
    type Error = AlongError;

    fn try_from(line: LineString<f64>) -> Result<Self> {
        Self::new(line.into_points())
    }
}

impl TryFrom<Vec<GeoPoint>> for GeoPath {
    type Error = AlongError;

    fn try_from(points: Vec<GeoPoint>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<GeoPath> for LineString<f64> {
    fn from(path: GeoPath) -> Self {
        path.points.into_iter().collect()
    }
}
