//! Geo Along Library - Travel Along Great-Circle Paths
//!
//! This library locates the point that lies a given travel distance along a polyline
//! drawn on a spherical earth. The path is walked segment by segment, great-circle
//! distances are accumulated, and the target point is interpolated inside the segment
//! where the distance runs out using a bearing and a destination projection.
//!
//! # Architecture
//!
//! - **[`Units`]**: Conversion between radians and lengths on the earth's surface
//! - **[`distance()`]**, **[`bearing()`]**, **[`destination()`]**: Pure spherical primitives
//! - **[`GeoPath`]**: Validated, non-empty sequence of `(longitude, latitude)` points
//! - **[`LineInput`]** / **[`OptionsInput`]**: Input shapes accepted at the API boundary
//! - **[`along()`]** / **[`point_at_distance()`]**: The traversal itself
//!
//! # Example
//!
//! ```
//! use geo_along_lib::{GeoPath, Units, point_at_distance};
//! use geo::Point;
//!
//! let path = GeoPath::new(vec![
//!     Point::new(-83.0, 30.0),
//!     Point::new(-84.0, 36.0),
//!     Point::new(-78.0, 41.0),
//! ])?;
//!
//! let point = point_at_distance(&path, 200.0, Units::Miles)?;
//! assert!((point.y() - 32.8678).abs() < 1e-3);
//! # Ok::<(), geo_along_lib::AlongError>(())
//! ```
//!
//! # Performance Characteristics
//!
//! - **Traversal**: O(N) in the number of path points, single pass, no allocation
//! - **Batch**: independent distances are evaluated in parallel

mod along;
mod bearing;
mod destination;
mod distance;
mod input;
mod path;
pub mod units;

// Public API exports
pub use along::{MAX_SAMPLES, along, point_at_distance, points_at_distances, sample_every};
pub use bearing::{bearing, final_bearing};
pub use destination::destination;
pub use distance::distance;
pub use input::{AlongOptions, Feature, LineInput, OptionsInput};
pub use path::{GeoPath, GeoPoint};
pub use units::Units;

/// Error types for the traversal and its input boundary
///
/// Every variant is an invalid-input failure: the computation is pure, so nothing
/// here is transient or worth retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlongError {
    #[error("Unsupported geometry: expected a LineString Feature or Geometry, got {0}")]
    UnsupportedGeometry(&'static str),

    #[error("Empty path")]
    EmptyPath,

    #[error("Invalid distance: {0} is not a finite number")]
    InvalidDistance(f64),

    #[error("Invalid coordinate at index {index}: ({lon}, {lat})")]
    InvalidCoordinate { index: usize, lon: f64, lat: f64 },

    #[error("Unknown units: {0}")]
    UnknownUnits(String),

    #[error("Too many samples: a step of {step} would exceed {limit} points")]
    TooManySamples { step: f64, limit: usize },
}

pub type Result<T> = std::result::Result<T, AlongError>;
