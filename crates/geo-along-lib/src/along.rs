//! Point at a travel distance along a path
//!
//! The traversal walks the path once, accumulating great-circle segment lengths.
//! As soon as the accumulated length reaches the requested distance, the answer is
//! interpolated backwards from the vertex just reached. Requests before the start
//! or beyond the end are clamped to the first or last vertex.

use crate::input::{AlongOptions, LineInput, OptionsInput};
use crate::{AlongError, GeoPath, GeoPoint, Result, Units, bearing, destination, distance};
use rayon::prelude::*;

/// Point `distance` along a line given as a geometry or a feature
///
/// This is the boundary entry point: the line and the options are normalized
/// once, then [`point_at_distance`] does the work. The result is a bare point,
/// never re-wrapped in the input feature's properties.
///
/// # Example
/// ```
/// use geo_along_lib::{along, LineInput};
/// use geo::line_string;
///
/// let line = line_string![(x: -83.0, y: 30.0), (x: -84.0, y: 36.0), (x: -78.0, y: 41.0)];
/// let point = along(LineInput::from(line), 200.0, "miles")?;
/// assert!((point.x() + 83.4609).abs() < 1e-3);
/// # Ok::<(), geo_along_lib::AlongError>(())
/// ```
pub fn along(
    line: impl Into<LineInput>,
    distance: f64,
    options: impl Into<OptionsInput>,
) -> Result<GeoPoint> {
    let path = GeoPath::try_from(line.into())?;
    let options = AlongOptions::try_from(options.into())?;
    point_at_distance(&path, distance, options.units)
}

/// Point `distance` units along `path`
///
/// - `distance <= 0` yields the first point
/// - `distance >= path.length(units)` yields the last point
/// - a distance landing exactly on a vertex yields that vertex
///
/// # Errors
/// [`AlongError::InvalidDistance`] when `distance` is not finite.
pub fn point_at_distance(path: &GeoPath, distance: f64, units: Units) -> Result<GeoPoint> {
    #[cfg(feature = "profiling")]
    profiling::scope!("along::point_at_distance");

    if !distance.is_finite() {
        return Err(AlongError::InvalidDistance(distance));
    }

    let points = path.points();
    let last = points.len() - 1;
    let mut travelled = 0.0;

    for i in 0..=last {
        if distance >= travelled && i == last {
            break;
        }

        if travelled >= distance {
            let overshot = distance - travelled;

            // Exact vertex hit: nothing to interpolate
            if overshot == 0.0 {
                return Ok(points[i]);
            }

            // Nothing before the first vertex to interpolate towards
            if i == 0 {
                tracing::debug!("Distance {distance} {units} precedes the path, clamping to start");
                return Ok(points[0]);
            }

            // Reached point i past the target: step back along segment (i-1, i).
            // The segment has non-zero length, otherwise the target would have
            // been reached at i-1.
            let direction = bearing(points[i], points[i - 1]) - 180.0;
            return Ok(destination(points[i], overshot, direction, units));
        }

        travelled += self::distance(points[i], points[i + 1], units);
        tracing::trace!("Travelled {travelled} {units} after segment {i}");
    }

    tracing::debug!("Distance {distance} {units} reaches the end of the path, clamping to end");
    Ok(points[last])
}

/// Points at many independent distances along `path`, evaluated in parallel
///
/// Results are in the same order as `distances`. Fails on the first non-finite
/// distance found.
pub fn points_at_distances(
    path: &GeoPath,
    distances: &[f64],
    units: Units,
) -> Result<Vec<GeoPoint>> {
    #[cfg(feature = "profiling")]
    profiling::scope!("along::points_at_distances");

    if let Some(&invalid) = distances.iter().find(|d| !d.is_finite()) {
        return Err(AlongError::InvalidDistance(invalid));
    }

    distances
        .par_iter()
        .map(|&d| point_at_distance(path, d, units))
        .collect()
}

/// Upper bound on the number of points [`sample_every`] will produce
pub const MAX_SAMPLES: usize = 1_000_000;

/// Points every `step` units along `path`, starting at the first point and
/// always ending with the last one
///
/// # Errors
/// - [`AlongError::InvalidDistance`] when `step` is not finite or not positive
/// - [`AlongError::TooManySamples`] when the step would yield more than
///   [`MAX_SAMPLES`] points
pub fn sample_every(path: &GeoPath, step: f64, units: Units) -> Result<Vec<GeoPoint>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(AlongError::InvalidDistance(step));
    }

    let total = path.length(units);
    let steps = (total / step).floor();
    // Room for the trailing end point
    if !(steps < (MAX_SAMPLES - 1) as f64) {
        return Err(AlongError::TooManySamples {
            step,
            limit: MAX_SAMPLES,
        });
    }
    let count = steps as usize;

    let mut distances: Vec<f64> = (0..=count).map(|n| n as f64 * step).collect();
    if distances.last().is_some_and(|&d| d < total) {
        distances.push(total);
    }

    points_at_distances(path, &distances, units)
}
